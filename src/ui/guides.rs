/// Guide characters drawn in front of tree rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeGuides {
    /// `|`, `+--`, `` `-- ``
    Ascii,
    #[default]
    Unicode,
}

impl TreeGuides {
    /// Ancestor column with more siblings below.
    pub const fn vertical(&self) -> &'static str {
        match self {
            Self::Ascii => "|   ",
            Self::Unicode => "\u{2502}   ",
        }
    }

    /// Row with siblings below.
    pub const fn branch(&self) -> &'static str {
        match self {
            Self::Ascii => "+-- ",
            Self::Unicode => "\u{251C}\u{2500}\u{2500} ",
        }
    }

    /// Last row among its siblings.
    pub const fn last(&self) -> &'static str {
        match self {
            Self::Ascii => "`-- ",
            Self::Unicode => "\u{2514}\u{2500}\u{2500} ",
        }
    }

    pub const fn space(&self) -> &'static str {
        "    "
    }

    /// Prefix for a row whose ancestors' "last sibling" flags are `is_last`
    /// (outermost first, the row itself at the end).
    pub fn prefix(&self, is_last: &[bool]) -> String {
        let Some((own, ancestors)) = is_last.split_last() else {
            return String::new();
        };
        let mut out = String::new();
        for &last in ancestors {
            out.push_str(if last { self.space() } else { self.vertical() });
        }
        out.push_str(if *own { self.last() } else { self.branch() });
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_top_level_has_none() {
        assert_eq!(TreeGuides::Unicode.prefix(&[]), "");
    }

    #[test]
    fn test_prefix_ascii() {
        let g = TreeGuides::Ascii;
        assert_eq!(g.prefix(&[false]), "+-- ");
        assert_eq!(g.prefix(&[true]), "`-- ");
        assert_eq!(g.prefix(&[false, true]), "|   `-- ");
        assert_eq!(g.prefix(&[true, false]), "    +-- ");
    }
}
