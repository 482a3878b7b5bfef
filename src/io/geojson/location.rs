use std::fmt;

/// Position of a value inside the document being decoded.
///
/// Built on the stack while descending and only rendered when an error is raised. Renders as a
/// JSON pointer in URI fragment form, e.g. `#/geometries/1/coordinates/0`.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Location<'a> {
    Root,
    Key(&'a Location<'a>, &'static str),
    Index(&'a Location<'a>, usize),
}

impl<'a> Location<'a> {
    pub(crate) fn key(&'a self, key: &'static str) -> Location<'a> {
        Location::Key(self, key)
    }

    pub(crate) fn index(&'a self, index: usize) -> Location<'a> {
        Location::Index(self, index)
    }
}

impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Root => f.write_str("#"),
            Location::Key(parent, key) => write!(f, "{parent}/{key}"),
            Location::Index(parent, index) => write!(f, "{parent}/{index}"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn render_pointer() {
        let root = Location::Root;
        assert_eq!(root.to_string(), "#");

        let geometries = root.key("geometries");
        let second = geometries.index(1);
        let coords = second.key("coordinates");
        assert_eq!(coords.index(0).to_string(), "#/geometries/1/coordinates/0");
    }
}
