use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use vitjoy_engine::{apply, evaluate, BuyAction, Gallery};
use vitjoy_runtime::{assets, Catalog, DisplayStore};
use vitjoy_types::{DisplayPatch, Filters, Product, SortBy, ViewMode};

use crate::presentation::format::{price_with_unit, stock_badge, truncate_for_display};

/// Interactive catalog browser.
///
/// The screen is a live rendition of the same pipeline the non-interactive
/// commands use: catalog -> query engine -> visible list arranged per the
/// persisted display preferences. Display changes are merge-updates on the
/// preference store, persisted best-effort as they happen.
pub fn handle(catalog: Catalog, store: DisplayStore, assets_root: Option<PathBuf>) -> Result<()> {
    let mut app = BrowseApp::new(catalog, store, assets_root);

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();
    result
}

enum InputMode {
    Normal,
    Search,
}

struct BrowseApp {
    catalog: Catalog,
    store: DisplayStore,
    assets_root: Option<PathBuf>,
    filters: Filters,
    visible: Vec<Product>,
    selected: usize,
    scroll: u16,
    gallery: Gallery,
    input_mode: InputMode,
    quit: bool,
}

impl BrowseApp {
    fn new(catalog: Catalog, store: DisplayStore, assets_root: Option<PathBuf>) -> Self {
        let mut app = Self {
            catalog,
            store,
            assets_root,
            filters: Filters::default(),
            visible: Vec::new(),
            selected: 0,
            scroll: 0,
            gallery: Gallery::new(0),
            input_mode: InputMode::Normal,
            quit: false,
        };
        app.refresh();
        app
    }

    fn run(&mut self, terminal: &mut ratatui::DefaultTerminal) -> Result<()> {
        while !self.quit {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        match self.input_mode {
                            InputMode::Search => self.on_search_key(key.code),
                            InputMode::Normal => self.on_key(key.code, key.modifiers),
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Recompute the derived view and keep the cursor and gallery valid.
    fn refresh(&mut self) {
        self.visible = apply(self.catalog.products(), &self.filters);
        if self.selected >= self.visible.len() {
            self.selected = self.visible.len().saturating_sub(1);
        }
        let image_count = self
            .visible
            .get(self.selected)
            .map(|p| p.images.len())
            .unwrap_or(0);
        self.gallery.resize(image_count);
    }

    fn select(&mut self, index: usize) {
        if index < self.visible.len() && index != self.selected {
            self.selected = index;
            self.gallery = Gallery::new(self.visible[self.selected].images.len());
        }
    }

    fn patch_display(&mut self, patch: DisplayPatch) {
        self.store.update(&patch);
    }

    fn on_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Backspace => {
                self.filters.search.pop();
                self.refresh();
            }
            KeyCode::Char(c) => {
                self.filters.search.push(c);
                self.refresh();
            }
            _ => {}
        }
    }

    fn on_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        let display = self.store.options();
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => self.quit = true,

            KeyCode::Char('/') => self.input_mode = InputMode::Search,

            KeyCode::Down | KeyCode::Char('j') => {
                self.select(self.selected.saturating_add(1).min(
                    self.visible.len().saturating_sub(1),
                ));
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select(self.selected.saturating_sub(1));
            }

            KeyCode::Right | KeyCode::Char('n') => self.gallery.next(),
            KeyCode::Left | KeyCode::Char('p') => self.gallery.previous(),
            KeyCode::Char('z') => self.gallery.toggle_zoom(),
            KeyCode::Char(c @ '1'..='9') => {
                // Direct image selection; out-of-range digits are ignored.
                self.gallery.select(c as usize - '1' as usize);
            }

            KeyCode::Char('g') => self.patch_display(DisplayPatch {
                view_mode: Some(ViewMode::Grid),
                ..Default::default()
            }),
            KeyCode::Char('l') => self.patch_display(DisplayPatch {
                view_mode: Some(ViewMode::List),
                ..Default::default()
            }),
            KeyCode::Char('c') => {
                let next = if display.columns >= 4 { 1 } else { display.columns + 1 };
                self.patch_display(DisplayPatch {
                    columns: Some(next),
                    ..Default::default()
                });
            }
            KeyCode::Char('d') => self.patch_display(DisplayPatch {
                show_description: Some(!display.show_description),
                ..Default::default()
            }),

            KeyCode::Char('s') => {
                self.filters.sort = match self.filters.sort {
                    SortBy::Name => SortBy::PriceAsc,
                    SortBy::PriceAsc => SortBy::PriceDesc,
                    SortBy::PriceDesc => SortBy::Name,
                };
                self.refresh();
            }
            KeyCode::Char('o') => {
                self.filters.in_stock_only = !self.filters.in_stock_only;
                self.refresh();
            }
            KeyCode::Char('r') => {
                self.filters = Filters::default();
                self.refresh();
            }

            _ => {}
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(2),
            ])
            .split(frame.area());

        self.render_header(frame, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);

        self.render_catalog(frame, body[0]);
        self.render_detail(frame, body[1]);
        self.render_footer(frame, chunks[2]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let sort_label = match self.filters.sort {
            SortBy::Name => "по названию",
            SortBy::PriceAsc => "цена ↑",
            SortBy::PriceDesc => "цена ↓",
        };

        let mut spans = vec![
            Span::styled("VITJOY", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::raw(format!(
                "  найдено {} из {}  ·  {}",
                self.visible.len(),
                self.catalog.len(),
                sort_label
            )),
        ];
        if self.filters.in_stock_only {
            spans.push(Span::styled("  ·  только в наличии", Style::default().fg(Color::Green)));
        }

        let search_style = match self.input_mode {
            InputMode::Search => Style::default().fg(Color::Yellow),
            InputMode::Normal => Style::default().fg(Color::DarkGray),
        };
        spans.push(Span::styled(
            format!("  ·  поиск: {}", self.filters.search),
            search_style,
        ));

        let header = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, area);
    }

    fn render_catalog(&mut self, frame: &mut Frame, area: Rect) {
        let display = self.store.options();
        let inner_width = area.width.saturating_sub(2).max(1);

        let (lines, selected_row) = match display.view_mode {
            ViewMode::List => self.list_lines(),
            ViewMode::Grid => self.grid_lines(usize::from(display.columns), inner_width),
        };

        // Keep the selected row inside the viewport.
        let viewport = area.height.saturating_sub(2).max(1);
        let row = selected_row as u16;
        if row < self.scroll {
            self.scroll = row;
        } else if row >= self.scroll + viewport {
            self.scroll = row + 1 - viewport;
        }

        let title = match display.view_mode {
            ViewMode::List => "Продукция · список".to_string(),
            ViewMode::Grid => format!("Продукция · сетка {}x", display.columns),
        };

        let widget = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title))
            .scroll((self.scroll, 0));
        frame.render_widget(widget, area);
    }

    fn list_lines(&self) -> (Vec<Line<'static>>, usize) {
        let lines = self
            .visible
            .iter()
            .enumerate()
            .map(|(i, product)| {
                let marker = if i == self.selected { "▸ " } else { "  " };
                let text = format!(
                    "{}{}  {}  [{}]",
                    marker,
                    truncate_for_display(&product.title, 36),
                    price_with_unit(product),
                    stock_badge(product)
                );
                Line::styled(text, self.item_style(i, product))
            })
            .collect();

        (lines, self.selected)
    }

    fn grid_lines(&self, columns: usize, width: u16) -> (Vec<Line<'static>>, usize) {
        let columns = columns.max(1);
        let cell_width = (usize::from(width) / columns).saturating_sub(2).max(8);
        let mut lines = Vec::new();

        for (row_index, row) in self.visible.chunks(columns).enumerate() {
            let mut spans = Vec::new();
            for (col_index, product) in row.iter().enumerate() {
                let index = row_index * columns + col_index;
                let marker = if index == self.selected { "▸" } else { " " };
                let cell = format!(
                    "{}{:<width$}",
                    marker,
                    truncate_for_display(
                        &format!("{} {}", product.title, price_with_unit(product)),
                        cell_width
                    ),
                    width = cell_width
                );
                spans.push(Span::styled(cell, self.item_style(index, product)));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }

        (lines, self.selected / columns)
    }

    fn item_style(&self, index: usize, product: &Product) -> Style {
        let mut style = if product.is_in_stock() {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        if index == self.selected {
            style = style.add_modifier(Modifier::BOLD).fg(Color::Green);
        }
        style
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect) {
        let display = self.store.options();
        let mut lines: Vec<Line> = Vec::new();

        if let Some(product) = self.visible.get(self.selected) {
            lines.push(Line::styled(
                product.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            lines.push(Line::raw(format!(
                "{}  ·  {}",
                price_with_unit(product),
                stock_badge(product)
            )));
            if !product.tags.is_empty() {
                lines.push(Line::styled(
                    product.tags.join(" · "),
                    Style::default().fg(Color::Green),
                ));
            }
            lines.push(Line::raw(""));

            match self.gallery.current() {
                Some(index) => {
                    let img = &product.images[index];
                    let zoom = if self.gallery.is_zoomed() { "  [увеличено]" } else { "" };
                    lines.push(Line::raw(format!(
                        "Фото {} / {}{}",
                        index + 1,
                        self.gallery.len(),
                        zoom
                    )));
                    lines.push(Line::raw(img.alt.clone()));
                    let location = match &self.assets_root {
                        Some(root) => match assets::resolve(root, &img.src) {
                            Some(path) => path.display().to_string(),
                            None => format!("{} (файл не найден)", img.src),
                        },
                        None => img.src.clone(),
                    };
                    lines.push(Line::styled(location, Style::default().fg(Color::DarkGray)));
                }
                None => lines.push(Line::styled(
                    "Нет изображений",
                    Style::default().fg(Color::DarkGray),
                )),
            }
            lines.push(Line::raw(""));

            if display.show_description {
                match product.description_text() {
                    Some(text) => lines.push(Line::raw(text.to_string())),
                    None => lines.push(Line::styled(
                        "Описание отсутствует.",
                        Style::default().fg(Color::DarkGray),
                    )),
                }
                lines.push(Line::raw(""));
            }

            match evaluate(product) {
                BuyAction::Buy(url) => {
                    lines.push(Line::styled(
                        "Купить на Kaspi",
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ));
                    lines.push(Line::styled(url, Style::default().fg(Color::DarkGray)));
                }
                BuyAction::Unavailable(reason) => {
                    lines.push(Line::styled(reason, Style::default().fg(Color::DarkGray)));
                }
            }
        } else {
            lines.push(Line::styled(
                "Ничего не найдено",
                Style::default().fg(Color::DarkGray),
            ));
        }

        let widget = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Карточка"));
        frame.render_widget(widget, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let hint = match self.input_mode {
            InputMode::Search => "ввод текста · Enter/Esc готово",
            InputMode::Normal => {
                "/ поиск  j/k выбор  n/p фото  z увеличить  g/l вид  c колонки  d описание  s сортировка  o наличие  r сброс  q выход"
            }
        };
        let footer = Paragraph::new(Line::styled(hint, Style::default().fg(Color::DarkGray)));
        frame.render_widget(footer, area);
    }
}
