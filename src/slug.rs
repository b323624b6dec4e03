//! URL Slug Utilities
//!
//! Boards are addressed in the URL by a slug derived from their name. The
//! id stays the real identifier; the slug is display plumbing only.

use crate::models::Board;

/// Derive a URL-safe slug from a board name.
///
/// Lowercases, trims, collapses whitespace runs to `-`, strips everything
/// outside `[a-z0-9_-]`, collapses `-` runs and trims edge hyphens.
/// Idempotent on its own output.
pub fn name_to_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_hyphen = false;
    for ch in name.trim().to_lowercase().chars() {
        let mapped = if ch.is_whitespace() {
            Some('-')
        } else if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
            Some(ch)
        } else {
            None
        };
        if let Some(c) = mapped {
            if c == '-' {
                if !last_was_hyphen && !slug.is_empty() {
                    slug.push('-');
                }
                last_was_hyphen = true;
            } else {
                slug.push(c);
                last_was_hyphen = false;
            }
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Turn a slug back into a display name: hyphens to spaces, words
/// title-cased. Lossy; used for headings only.
pub fn slug_to_display_name(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Find the board whose name slugifies to `slug`.
pub fn find_board_by_slug<'a>(boards: &'a [Board], slug: &str) -> Option<&'a Board> {
    if slug.is_empty() {
        return None;
    }
    boards.iter().find(|board| name_to_slug(&board.name) == slug)
}

/// Generate a slug unique among `boards` by suffixing `-1`, `-2`, ...
/// `exclude_id` skips the board being renamed.
pub fn generate_unique_slug(boards: &[Board], base_name: &str, exclude_id: Option<u64>) -> String {
    let base_slug = name_to_slug(base_name);
    let mut slug = base_slug.clone();
    let mut counter = 1;
    while boards
        .iter()
        .any(|board| Some(board.id) != exclude_id && name_to_slug(&board.name) == slug)
    {
        slug = format!("{}-{}", base_slug, counter);
        counter += 1;
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(id: u64, name: &str) -> Board {
        Board { id, name: name.to_string(), columns: Vec::new() }
    }

    #[test]
    fn slug_strips_and_collapses() {
        assert_eq!(name_to_slug("  My Board!! "), "my-board");
        assert_eq!(name_to_slug("Sprint   42"), "sprint-42");
        assert_eq!(name_to_slug("--já--feito--"), "j-feito");
        assert_eq!(name_to_slug("!!!"), "");
    }

    #[test]
    fn slug_is_idempotent() {
        for name in ["  My Board!! ", "A  B", "under_score", "trailing- "] {
            let once = name_to_slug(name);
            assert_eq!(name_to_slug(&once), once);
        }
    }

    #[test]
    fn slug_has_no_edge_hyphens() {
        let slug = name_to_slug(" - edge case - ");
        assert!(!slug.starts_with('-'));
        assert!(!slug.ends_with('-'));
    }

    #[test]
    fn display_name_title_cases() {
        assert_eq!(slug_to_display_name("my-board"), "My Board");
        assert_eq!(slug_to_display_name(""), "");
    }

    #[test]
    fn find_by_slug_matches_unique_board() {
        let boards = vec![board(1, "My Board"), board(2, "Outro Quadro")];
        assert_eq!(find_board_by_slug(&boards, "outro-quadro").map(|b| b.id), Some(2));
        assert_eq!(find_board_by_slug(&boards, "missing"), None);
        assert_eq!(find_board_by_slug(&boards, ""), None);
    }

    #[test]
    fn unique_slug_suffixes_on_collision() {
        let boards = vec![board(1, "  My Board!! ")];
        assert_eq!(generate_unique_slug(&boards, "My Board", None), "my-board-1");

        let boards = vec![board(1, "My Board"), board(2, "My Board 1")];
        // "my-board-1" collides with board 2, so counting continues.
        assert_eq!(name_to_slug("My Board 1"), "my-board-1");
        assert_eq!(generate_unique_slug(&boards, "My Board", None), "my-board-2");
    }

    #[test]
    fn unique_slug_ignores_excluded_board() {
        let boards = vec![board(1, "My Board")];
        assert_eq!(generate_unique_slug(&boards, "My Board", Some(1)), "my-board");
    }
}
