// patterns/wildcard.rs
use camino::Utf8Path;

/// A pattern with a `*` split into the part before and after it
///
/// `build*.o` becomes `dir = "build"`, `ext = ".o"`. Only the first two
/// pieces count: anything after a second `*` is ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wildcard {
    pub dir: String,
    pub ext: String,
}

impl Wildcard {
    /// Splits a pattern on `*`, or returns `None` if it has no wildcard
    pub fn parse(pattern: &str) -> Option<Self> {
        if !pattern.contains('*') {
            return None;
        }
        let mut pieces = pattern.split('*');
        let dir = pieces.next().unwrap_or_default().to_owned();
        let ext = pieces.next().unwrap_or_default().to_owned();
        Some(Self { dir, ext })
    }

    /// The path must end with `ext`, and either contain `dir` as a whole
    /// segment or contain every `/`-delimited piece of `dir` somewhere
    pub fn matches(&self, path: &Utf8Path) -> bool {
        let text = path.as_str();
        if !text.ends_with(&self.ext) {
            return false;
        }

        path.iter().any(|segment| segment == self.dir)
            || self
                .dir
                .split(['/', std::path::MAIN_SEPARATOR])
                .all(|piece| text.contains(piece))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_star() {
        let w = Wildcard::parse("build*.o").unwrap();
        assert_eq!(w.dir, "build");
        assert_eq!(w.ext, ".o");
        assert_eq!(Wildcard::parse("plain.txt"), None);

        let w = Wildcard::parse("a*b*c").unwrap();
        assert_eq!((w.dir.as_str(), w.ext.as_str()), ("a", "b"));
    }

    #[test]
    fn directory_segment_and_suffix() {
        let w = Wildcard::parse("build*.o").unwrap();
        assert!(w.matches(Utf8Path::new("/project/build/out.o")));
        assert!(!w.matches(Utf8Path::new("/project/src/out.o")));
        assert!(!w.matches(Utf8Path::new("/project/build/out.c")));
    }

    #[test]
    fn nested_dir_pieces_match_as_substrings() {
        let w = Wildcard::parse("assets/img*.png").unwrap();
        assert!(w.matches(Utf8Path::new("/site/assets/images/logo.png")));
        assert!(!w.matches(Utf8Path::new("/site/assets/fonts/logo.png")));
    }

    #[test]
    fn trailing_star_matches_anything_under_dir() {
        let w = Wildcard::parse("node_modules*").unwrap();
        assert!(w.matches(Utf8Path::new("/app/node_modules/left-pad/index.js")));
    }
}
