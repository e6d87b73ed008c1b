use crate::state::{AppState, SortKey, SortState, Story};

impl SortState {
    /// What: State after the user selects the `key` column.
    ///
    /// Output:
    /// - Same column: `is_reverse` flips. Different column: that column, not reversed.
    #[must_use]
    pub fn toggle(self, key: SortKey) -> Self {
        Self {
            sort_key: key,
            is_reverse: self.sort_key == key && !self.is_reverse,
        }
    }

    /// What: Header indicator for `column`, empty unless it is the active column.
    #[must_use]
    pub fn indicator(self, column: SortKey) -> &'static str {
        if self.sort_key == SortKey::None || self.sort_key != column {
            ""
        } else if self.is_reverse {
            " ▲"
        } else {
            " ▼"
        }
    }
}

/// What: Apply `sort` to `list`, returning a new ordering.
///
/// Inputs:
/// - `list`: Stories in fetch order
/// - `sort`: Active column and reverse flag
///
/// Output:
/// - Title/Author ascending, Comment/Point descending, each flipped when `is_reverse`.
///
/// Details:
/// - Sorting is stable on the ascending pass; the numeric columns are reversed afterwards, so
///   ties appear in reverse fetch order there.
#[must_use]
pub fn sort_stories(list: &[Story], sort: SortState) -> Vec<Story> {
    let mut out = list.to_vec();
    match sort.sort_key {
        SortKey::None => {}
        SortKey::Title => out.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::Author => out.sort_by(|a, b| a.author.cmp(&b.author)),
        SortKey::Comment => {
            out.sort_by_key(|s| s.num_comments);
            out.reverse();
        }
        SortKey::Point => {
            out.sort_by_key(|s| s.points);
            out.reverse();
        }
    }
    if sort.is_reverse {
        out.reverse();
    }
    out
}

/// What: Select a sort column and keep the highlighted story highlighted.
///
/// Inputs:
/// - `app`: Mutable application state (sort, selection)
/// - `key`: Column chosen by the user
///
/// Output:
/// - Updates `app.sort` and moves `app.selected` to the previously highlighted story's new row.
pub fn select_sort_column(app: &mut AppState, key: SortKey) {
    let prev_id = app.selected_story().map(|s| s.object_id);
    app.sort = app.sort.toggle(key);
    tracing::debug!(
        column = key.label(),
        reverse = app.sort.is_reverse,
        "[Sort] Column selected"
    );
    if let Some(id) = prev_id
        && let Some(pos) = app.visible_stories().iter().position(|s| s.object_id == id)
    {
        app.selected = pos;
    }
    app.clamp_selection();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(id: &str, title: &str, author: &str, comments: u64, points: u64) -> Story {
        Story {
            object_id: id.to_string(),
            url: String::new(),
            title: title.to_string(),
            author: author.to_string(),
            num_comments: comments,
            points,
        }
    }

    fn sample() -> Vec<Story> {
        vec![
            story("1", "Redux", "dan", 2, 5),
            story("2", "Angular", "misko", 9, 1),
            story("3", "React", "jordan", 3, 4),
        ]
    }

    fn ids(list: &[Story]) -> Vec<&str> {
        list.iter().map(|s| s.object_id.as_str()).collect()
    }

    #[test]
    /// What: Toggle semantics of the sort header.
    ///
    /// Inputs:
    /// - Click Title, Title, Author, Author, Author.
    ///
    /// Output:
    /// - Reverse flips on repeated clicks and resets when switching column.
    fn toggle_rules() {
        let s = SortState::default().toggle(SortKey::Title);
        assert_eq!(s, SortState { sort_key: SortKey::Title, is_reverse: false });
        let s = s.toggle(SortKey::Title);
        assert!(s.is_reverse);
        let s = s.toggle(SortKey::Author);
        assert_eq!(s, SortState { sort_key: SortKey::Author, is_reverse: false });
        let s = s.toggle(SortKey::Author).toggle(SortKey::Author);
        assert!(!s.is_reverse);
    }

    #[test]
    /// What: Baseline orders per column.
    fn column_orders() {
        let list = sample();
        let by = |k| sort_stories(&list, SortState { sort_key: k, is_reverse: false });
        assert_eq!(ids(&by(SortKey::None)), vec!["1", "2", "3"]);
        assert_eq!(ids(&by(SortKey::Title)), vec!["2", "3", "1"]);
        assert_eq!(ids(&by(SortKey::Author)), vec!["1", "3", "2"]);
        assert_eq!(ids(&by(SortKey::Comment)), vec!["2", "3", "1"]);
        assert_eq!(ids(&by(SortKey::Point)), vec!["1", "3", "2"]);
    }

    #[test]
    /// What: Sorting by title then toggling reverse twice returns to ascending order.
    fn title_reverse_round_trip() {
        let list = sample();
        let asc = SortState::default().toggle(SortKey::Title);
        let desc = asc.toggle(SortKey::Title);
        let back = desc.toggle(SortKey::Title);
        assert_eq!(
            ids(&sort_stories(&list, desc)),
            vec!["1", "3", "2"]
        );
        assert_eq!(sort_stories(&list, back), sort_stories(&list, asc));
    }

    #[test]
    /// What: Numeric ties come out in reverse fetch order on the descending baseline.
    fn numeric_ties_reverse_fetch_order() {
        let list = vec![story("a", "", "", 1, 7), story("b", "", "", 1, 7)];
        let out = sort_stories(&list, SortState::default().toggle(SortKey::Point));
        assert_eq!(ids(&out), vec!["b", "a"]);
    }

    #[test]
    /// What: Indicator only on the active column.
    fn indicator_follows_active_column() {
        let s = SortState::default();
        assert_eq!(s.indicator(SortKey::Title), "");
        let s = s.toggle(SortKey::Title);
        assert_eq!(s.indicator(SortKey::Title), " ▼");
        assert_eq!(s.indicator(SortKey::Author), "");
        assert_eq!(s.toggle(SortKey::Title).indicator(SortKey::Title), " ▲");
    }

    #[test]
    /// What: Re-sorting keeps the highlighted story highlighted.
    fn select_sort_column_preserves_selection() {
        let mut app = AppState::default();
        app.stories.data = sample();
        app.selected = 2; // React in fetch order
        select_sort_column(&mut app, SortKey::Title);
        assert_eq!(
            app.selected_story().map(|s| s.title),
            Some("React".to_string())
        );
        assert_eq!(app.selected, 1);
    }
}
