//! Bottom navigation bar

use super::{GOLD, PRIMARY};
use crate::app::state::NavTab;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Draw the four tabs with `active` highlighted
pub fn render_bottom_nav(f: &mut Frame, area: Rect, active: NavTab) {
    let titles: Vec<Line> = NavTab::all()
        .iter()
        .map(|tab| Line::from(tab.title()))
        .collect();

    let tabs = Tabs::new(titles)
        .select(active.index())
        .style(Style::default().fg(ratatui::style::Color::Gray))
        .highlight_style(Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD))
        .divider("•")
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(GOLD))
                .title(" Tab ⇆ "),
        );

    f.render_widget(tabs, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::test_support::render_to_string;

    #[test]
    fn test_all_tabs_are_drawn() {
        let text = render_to_string(50, 3, |f| {
            let area = f.size();
            render_bottom_nav(f, area, NavTab::History)
        });
        for tab in NavTab::all() {
            assert!(text.contains(tab.title()), "missing {}", tab.title());
        }
    }
}
