//! Selected submitter pills widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::domain::entities::{SelectionSet, short_identity};

/// Single row of pills, one per pinned submitter, in pin order.
pub struct SelectionPills<'a> {
    selection: &'a SelectionSet,
    cursor: usize,
    focused: bool,
}

impl<'a> SelectionPills<'a> {
    /// Creates a pills row over the current selection.
    #[must_use]
    pub const fn new(selection: &'a SelectionSet) -> Self {
        Self {
            selection,
            cursor: 0,
            focused: false,
        }
    }

    /// Sets the cursor position.
    #[must_use]
    pub const fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    /// Sets focus state.
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn pill_labels(&self) -> Vec<String> {
        self.selection.identities().iter().map(short_identity).collect()
    }
}

impl Widget for SelectionPills<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        let title = if self.focused {
            " Pinned submitters (x: unpin) "
        } else {
            " Pinned submitters "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title);

        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = Vec::new();
        for (i, label) in self.pill_labels().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let style = if self.focused && i == self.cursor {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Yellow)
            };
            spans.push(Span::styled(format!("[{label}]"), style));
        }

        let paragraph = Paragraph::new(Line::from(spans));
        paragraph.render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::pubkey::Pubkey;

    #[test]
    fn test_pills_keep_pin_order_and_short_form() {
        let first = Pubkey::new_unique();
        let second = Pubkey::new_unique();
        let mut selection = SelectionSet::new();
        selection.select(first);
        selection.select(second);

        let pills = SelectionPills::new(&selection);
        let labels = pills.pill_labels();

        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0], short_identity(&first));
        assert_eq!(labels[1], short_identity(&second));
        assert!(labels[0].contains("........"));
    }
}
