use clap::ValueEnum;
use vitjoy_types::{AspectRatio, Density, ImageFit, SortBy, ViewMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

/// Sort flag; value names match the storefront tokens
/// (name, price-asc, price-desc).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    Name,
    PriceAsc,
    PriceDesc,
}

impl From<SortKey> for SortBy {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::Name => SortBy::Name,
            SortKey::PriceAsc => SortBy::PriceAsc,
            SortKey::PriceDesc => SortBy::PriceDesc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewModeArg {
    Grid,
    List,
}

impl From<ViewModeArg> for ViewMode {
    fn from(arg: ViewModeArg) -> Self {
        match arg {
            ViewModeArg::Grid => ViewMode::Grid,
            ViewModeArg::List => ViewMode::List,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DensityArg {
    Cozy,
    Compact,
}

impl From<DensityArg> for Density {
    fn from(arg: DensityArg) -> Self {
        match arg {
            DensityArg::Cozy => Density::Cozy,
            DensityArg::Compact => Density::Compact,
        }
    }
}

/// Aspect ratio flag. Slashes are awkward in shell flags, so the CLI
/// spellings are 1-1, 4-3 and 3-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RatioArg {
    #[value(name = "1-1")]
    Square,
    #[value(name = "4-3")]
    FourThree,
    #[value(name = "3-4")]
    ThreeFour,
}

impl From<RatioArg> for AspectRatio {
    fn from(arg: RatioArg) -> Self {
        match arg {
            RatioArg::Square => AspectRatio::Square,
            RatioArg::FourThree => AspectRatio::FourThree,
            RatioArg::ThreeFour => AspectRatio::ThreeFour,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ImageFitArg {
    Cover,
    Contain,
}

impl From<ImageFitArg> for ImageFit {
    fn from(arg: ImageFitArg) -> Self {
        match arg {
            ImageFitArg::Cover => ImageFit::Cover,
            ImageFitArg::Contain => ImageFit::Contain,
        }
    }
}
