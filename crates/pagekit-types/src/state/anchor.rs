//! In-page anchor classification.

/// What an anchor click should do, before looking at the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorTarget<'a> {
    /// `href="#"` or missing: suppress navigation, do nothing else
    Placeholder,
    /// `#id`: scroll to the element with this id if it exists
    Fragment {
        /// Full href including the leading `#`
        href: &'a str,
        /// Element id to look up
        id: &'a str,
    },
    /// Not an in-page link; leave the click alone
    External,
}

impl<'a> AnchorTarget<'a> {
    /// Classify an anchor's `href` attribute.
    pub fn classify(href: Option<&'a str>) -> Self {
        match href {
            None | Some("" | "#") => Self::Placeholder,
            Some(href) => match href.strip_prefix('#') {
                Some(id) => Self::Fragment { href, id },
                None => Self::External,
            },
        }
    }
}
