//! Widgets for the terminal map view

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Tabs};
use ratatui::Frame;

use crate::classify::VisaCategory;
use crate::render::MapSummary;

fn category_color(category: VisaCategory) -> Color {
    let (r, g, b) = category.rgb();
    Color::Rgb(r, g, b)
}

/// Title, passport and load notice
pub struct HeaderPanel<'a> {
    summary: &'a MapSummary,
}

impl<'a> HeaderPanel<'a> {
    pub fn new(summary: &'a MapSummary) -> Self {
        Self { summary }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let title_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let mut lines = vec![Line::from(vec![
            Span::styled(" ✈ ", title_style),
            Span::styled(
                format!("Countries {} can visit without a visa", self.summary.demonym),
                title_style,
            ),
        ])];

        match &self.summary.notice {
            Some(notice) => lines.push(Line::from(Span::styled(
                format!("   {}", notice),
                Style::default().fg(Color::Red),
            ))),
            None => lines.push(Line::from(Span::styled(
                format!("   {} regions on the map", self.summary.locations.len()),
                Style::default().fg(Color::Gray),
            ))),
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Visa-Free Travel Map: {} passport ", self.summary.passport))
            .border_style(Style::default().fg(Color::Blue));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// Four colored blocks with list lengths and shaded regions
pub struct LegendPanel<'a> {
    summary: &'a MapSummary,
}

impl<'a> LegendPanel<'a> {
    pub fn new(summary: &'a MapSummary) -> Self {
        Self { summary }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);

        for (entry, chunk) in self.summary.legend.iter().zip(chunks.iter()) {
            let style = Style::default()
                .fg(Color::Black)
                .bg(category_color(entry.category))
                .add_modifier(Modifier::BOLD);
            let caption = match entry.listed {
                Some(listed) => format!("{} ({})", entry.category.label(), listed),
                None => entry.category.label().to_string(),
            };
            let lines = vec![
                Line::from(Span::styled(caption, style)),
                Line::from(Span::styled(
                    format!("{} on the map", entry.regions),
                    Style::default().fg(Color::Black),
                )),
            ];
            let paragraph = Paragraph::new(lines)
                .style(Style::default().bg(category_color(entry.category)))
                .block(Block::default().borders(Borders::NONE));
            frame.render_widget(paragraph, *chunk);
        }
    }
}

/// Scrollable list of the selected category's countries
pub struct CountryListPanel<'a> {
    summary: &'a MapSummary,
    selected: usize,
    offset: usize,
}

impl<'a> CountryListPanel<'a> {
    pub fn new(summary: &'a MapSummary, selected: usize, offset: usize) -> Self {
        Self {
            summary,
            selected,
            offset,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(1)])
            .split(area);

        let titles: Vec<Line> = self
            .summary
            .lists
            .iter()
            .map(|(category, names)| {
                Line::from(Span::styled(
                    format!(" {} ({}) ", category.label(), names.len()),
                    Style::default().fg(category_color(*category)),
                ))
            })
            .collect();
        let tabs = Tabs::new(titles)
            .select(self.selected)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_widget(tabs, chunks[0]);

        let names: &[String] = self
            .summary
            .lists
            .get(self.selected)
            .map(|(_, names)| names.as_slice())
            .unwrap_or(&[]);

        let visible_height = chunks[1].height.saturating_sub(2) as usize; // -2 for borders
        let start = self.offset.min(names.len().saturating_sub(visible_height));

        let items: Vec<ListItem> = names[start..]
            .iter()
            .map(|name| ListItem::new(Span::raw(format!(" {}", name))))
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Countries (Tab: switch, ↑/↓: scroll, q: quit) ")
            .border_style(Style::default().fg(Color::Blue));

        frame.render_widget(List::new(items).block(block), chunks[1]);
    }
}
