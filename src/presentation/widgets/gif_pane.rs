//! GIF list pane widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::domain::entities::{GifEntry, GifList, SelectionSet, short_identity};

/// Scrollable list of GIF entries, grouped by the viewer's selection.
///
/// Pinned submitters' entries come first under a `Pinned` label, the rest
/// under `Others`. Grouping is recomputed from the selection every frame.
/// Each entry takes two rows: the link and its submitter.
pub struct GifPane<'a> {
    list: &'a GifList,
    selection: &'a SelectionSet,
    cursor: usize,
    focused: bool,
}

impl<'a> GifPane<'a> {
    /// Creates a pane over the list and the current selection.
    #[must_use]
    pub const fn new(list: &'a GifList, selection: &'a SelectionSet) -> Self {
        Self {
            list,
            selection,
            cursor: 0,
            focused: false,
        }
    }

    /// Sets the cursor position in grouped order.
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

    /// Builds the display lines and the cursor's top line index.
    fn build_lines(&self) -> (Vec<Line<'a>>, usize) {
        let partition = self.selection.partition(self.list.entries());
        let mut lines = Vec::new();
        let mut cursor_top = 0;
        let mut index = 0;

        if !partition.selected().is_empty() {
            lines.push(group_label("Pinned", Color::Yellow));
        }
        for &entry in partition.selected() {
            self.push_entry(&mut lines, entry, index, &mut cursor_top);
            index += 1;
        }

        if !partition.selected().is_empty() && !partition.others().is_empty() {
            lines.push(group_label("Others", Color::DarkGray));
        }
        for &entry in partition.others() {
            self.push_entry(&mut lines, entry, index, &mut cursor_top);
            index += 1;
        }

        (lines, cursor_top)
    }

    fn push_entry(
        &self,
        lines: &mut Vec<Line<'a>>,
        entry: &'a GifEntry,
        index: usize,
        cursor_top: &mut usize,
    ) {
        let at_cursor = index == self.cursor;
        if at_cursor {
            *cursor_top = lines.len();
        }

        let highlighted = at_cursor && self.focused;
        let marker = if highlighted { "> " } else { "  " };
        let link_style = if highlighted {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(entry.link(), link_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    by {}", short_identity(&entry.submitter())),
            Style::default().fg(Color::DarkGray),
        )));
    }
}

fn group_label(text: &str, color: Color) -> Line<'_> {
    Line::from(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

impl Widget for GifPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" GIF List ({}) ", self.list.len()));

        let inner = block.inner(area);
        block.render(area, buf);

        if self.list.is_empty() {
            let empty = Paragraph::new("No GIFs yet. Type a link above and press Enter.")
                .style(Style::default().fg(Color::DarkGray));
            empty.render(inner, buf);
            return;
        }

        let (lines, cursor_top) = self.build_lines();
        let height = inner.height as usize;
        let offset = (cursor_top + 2).saturating_sub(height);

        #[allow(clippy::cast_possible_truncation)]
        let paragraph = Paragraph::new(lines).scroll((offset as u16, 0));
        paragraph.render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::pubkey::Pubkey;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn sample_list(submitters: &[Pubkey]) -> GifList {
        let entries = submitters
            .iter()
            .enumerate()
            .map(|(i, submitter)| GifEntry::new(format!("gif-{i}"), *submitter))
            .collect();
        GifList::new(submitters.len() as u64, entries)
    }

    #[test]
    fn test_no_labels_without_selection() {
        let list = sample_list(&[Pubkey::new_unique(), Pubkey::new_unique()]);
        let selection = SelectionSet::new();
        let pane = GifPane::new(&list, &selection);

        let (lines, cursor_top) = pane.build_lines();

        assert_eq!(lines.len(), 4);
        assert_eq!(cursor_top, 0);
        assert!(line_text(&lines[0]).contains("gif-0"));
        assert!(line_text(&lines[1]).contains("by "));
    }

    #[test]
    fn test_pinned_entries_render_first() {
        let pinned = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let list = sample_list(&[other, pinned, other]);
        let mut selection = SelectionSet::new();
        selection.select(pinned);
        let pane = GifPane::new(&list, &selection);

        let (lines, _) = pane.build_lines();

        assert_eq!(line_text(&lines[0]), "Pinned");
        assert!(line_text(&lines[1]).contains("gif-1"));
        assert_eq!(line_text(&lines[3]), "Others");
        assert!(line_text(&lines[4]).contains("gif-0"));
        assert!(line_text(&lines[6]).contains("gif-2"));
    }

    #[test]
    fn test_cursor_top_accounts_for_labels() {
        let pinned = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let list = sample_list(&[other, pinned]);
        let mut selection = SelectionSet::new();
        selection.select(pinned);

        let pane = GifPane::new(&list, &selection).cursor(1).focused(true);
        let (lines, cursor_top) = pane.build_lines();

        // Pinned label, pinned entry pair, Others label, then the cursor.
        assert_eq!(cursor_top, 4);
        assert!(line_text(&lines[cursor_top]).starts_with("> "));
    }
}
