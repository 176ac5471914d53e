//! Field naming annotations.
//!
//! An annotation is a directive of the form `name[,option,...]`, the same
//! shape JSON field tags use. Only `name` picks the wire name of a field;
//! options such as `omitempty` are kept for other consumers of the same
//! annotation and never change how a field is mapped here.
//!
//! ```
//! use urlparam::tag::Annotation;
//!
//! let tag = Annotation::parse("busi_type,omitempty");
//! assert_eq!(tag.name(), "busi_type");
//! assert!(tag.has_option("omitempty"));
//!
//! assert!(Annotation::parse("-").is_skipped());
//! ```

/// Annotation value that excludes a field from the mapping.
pub const SKIP: &str = "-";

/// A parsed field naming annotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Annotation<'a> {
    raw: &'a str,
    name: &'a str,
    options: &'a str,
}

impl<'a> Annotation<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let (name, options) = raw.split_once(',').unwrap_or((raw, ""));
        Annotation { raw, name, options }
    }

    /// `true` when the whole annotation is `-`.
    ///
    /// `-,` is *not* a skip marker: it names the field `-`.
    pub fn is_skipped(&self) -> bool {
        self.raw == SKIP
    }

    /// Leading segment of the annotation. May be empty.
    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn options(&self) -> impl Iterator<Item = &'a str> + 'a {
        let options = self.options;
        options.split(',').filter(|o| !o.is_empty())
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options().any(|o| o == option)
    }
}

/// Resolves the wire name of a field.
///
/// `tags` holds the `(family, annotation)` pairs declared on the field.
/// Returns `None` when the annotation of `family` excludes the field, and
/// falls back to `ident` when the family has no annotation or its leading
/// segment is empty.
pub fn wire_name<'a>(
    ident: &'a str,
    tags: &'a [(&'static str, &'static str)],
    family: &str,
) -> Option<&'a str> {
    let Some(annotation) = lookup(tags, family).map(Annotation::parse) else {
        return Some(ident);
    };
    if annotation.is_skipped() {
        return None;
    }
    match annotation.name() {
        "" => Some(ident),
        name => Some(name),
    }
}

fn lookup(tags: &[(&'static str, &'static str)], family: &str) -> Option<&'static str> {
    tags.iter()
        .find(|(f, _)| *f == family)
        .map(|(_, annotation)| *annotation)
}

#[cfg(test)]
mod test {
    use super::{Annotation, wire_name};

    const TAGS: &[(&str, &str)] = &[("json", "busi_type,omitempty"), ("qs", "bt")];

    #[test]
    fn name_ignores_options() {
        assert_eq!(wire_name("BusiType", TAGS, "json"), Some("busi_type"));
        assert_eq!(wire_name("BusiType", TAGS, "qs"), Some("bt"));
    }

    #[test]
    fn missing_family_falls_back_to_ident() {
        assert_eq!(wire_name("BusiType", TAGS, "xml"), Some("BusiType"));
        assert_eq!(wire_name("BusiType", &[], "json"), Some("BusiType"));
    }

    #[test]
    fn empty_name_falls_back_to_ident() {
        let tags = &[("json", ",omitempty")];
        assert_eq!(wire_name("AdposID", tags, "json"), Some("AdposID"));
        assert_eq!(wire_name("AdposID", &[("json", "")], "json"), Some("AdposID"));
    }

    #[test]
    fn dash_skips_field() {
        assert_eq!(wire_name("AdposID", &[("json", "-")], "json"), None);
        // a skip in one family does not leak into another
        assert_eq!(
            wire_name("AdposID", &[("json", "-")], "qs"),
            Some("AdposID")
        );
    }

    #[test]
    fn dash_with_options_is_a_name() {
        assert_eq!(wire_name("Dash", &[("json", "-,")], "json"), Some("-"));
    }

    #[test]
    fn options() {
        let tag = Annotation::parse("uid,omitempty,string");
        assert_eq!(tag.name(), "uid");
        assert_eq!(tag.options().collect::<Vec<_>>(), vec!["omitempty", "string"]);
        assert!(tag.has_option("string"));
        assert!(!tag.has_option("uid"));

        let bare = Annotation::parse("uid");
        assert_eq!(bare.options().count(), 0);
        assert!(!bare.is_skipped());
    }
}
