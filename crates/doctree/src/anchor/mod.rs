mod normalize;
mod pattern;

pub use normalize::normalize;
pub use pattern::heading_pattern;

/// The text carved out for one heading.
///
/// `anchored` is false when the heading's title could not be located in its
/// window and the whole window was attributed to it instead. Callers that
/// care about boundary confidence can inspect the flag; the span itself is
/// always usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedSpan {
    pub text: String,
    pub anchored: bool,
}

/// Carve the text span belonging to one heading out of its page window.
///
/// The span runs from the heading's own anchor to the next heading's anchor,
/// searched strictly after the current match so a stray earlier occurrence of
/// the next title cannot truncate the span. Two fallbacks, both silent:
/// no anchor for the current title attributes the entire window to it, and a
/// missing next anchor extends the span to the window end.
pub fn locate_span(window: &str, title: &str, next_title: Option<&str>) -> LocatedSpan {
    let norm_window = normalize(window);
    let norm_title = normalize(title);

    let found = heading_pattern(&norm_title).and_then(|re| re.find(&norm_window));
    let Some(m) = found else {
        log::debug!("heading {title:?} not anchored; attributing full window");
        return LocatedSpan {
            text: norm_window.trim().to_string(),
            anchored: false,
        };
    };

    let start = m.start();
    if let Some(next) = next_title {
        let norm_next = normalize(next);
        let next_found =
            heading_pattern(&norm_next).and_then(|re| re.find_at(&norm_window, m.end()));
        match next_found {
            Some(n) => {
                return LocatedSpan {
                    text: norm_window[start..n.start()].trim().to_string(),
                    anchored: true,
                };
            }
            None => {
                log::debug!("next heading {next:?} not anchored; extending span to window end");
            }
        }
    }

    LocatedSpan {
        text: norm_window[start..].trim().to_string(),
        anchored: true,
    }
}
