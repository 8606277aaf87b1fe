use serde::Deserialize;
use std::borrow::Cow;

/// A single annotation token as declared in the schema document.
///
/// Tokens are classified once at the load boundary. Relationship shorthands,
/// the enumeration/embedding markers, and the Lombok vocabulary become typed
/// variants; everything else is carried as [`Annotation::Custom`] and emitted
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Annotation {
    Relation(Relation),
    Enumerated,
    Embedded,
    Lombok(Lombok),
    Custom(String),
}

/// A relationship shorthand: the association kind plus which side owns the
/// join metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
    pub kind: RelationKind,
    pub side: RelationSide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationSide {
    /// The side carrying the join column or join table.
    Owning,
    /// The side referring back with `mappedBy`.
    Inverse,
}

/// The Lombok markers the boilerplate policy recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lombok {
    NoArgsConstructor,
    RequiredArgsConstructor,
    AllArgsConstructor,
    Getter,
    Setter,
    ToString,
    EqualsAndHashCode,
    Data,
    Value,
    Builder,
    With,
    NonNull,
    SneakyThrows,
    Synchronized,
}

impl Annotation {
    /// The canonical token text, used when a token is emitted as-is.
    pub fn token_text(&self) -> Cow<'_, str> {
        match self {
            Annotation::Relation(relation) => Cow::Borrowed(relation.token_text()),
            Annotation::Enumerated => Cow::Borrowed("@Enumerated"),
            Annotation::Embedded => Cow::Borrowed("@Embedded"),
            Annotation::Lombok(lombok) => Cow::Borrowed(lombok.token_text()),
            Annotation::Custom(raw) => Cow::Borrowed(raw),
        }
    }

    pub fn as_lombok(&self) -> Option<Lombok> {
        match self {
            Annotation::Lombok(lombok) => Some(*lombok),
            _ => None,
        }
    }
}

impl Relation {
    fn token_text(&self) -> &'static str {
        use {RelationKind::*, RelationSide::*};

        match (self.kind, self.side) {
            (OneToOne, Owning) => "@OneToOneJoinColumn",
            (OneToOne, Inverse) => "@OneToOneMappedBy",
            (OneToMany, Inverse) => "@OneToManyMappedBy",
            (ManyToOne, Owning) => "@ManyToOneJoinColumn",
            (ManyToMany, Owning) => "@ManyToManyJoinTable",
            (ManyToMany, Inverse) => "@ManyToManyMappedBy",
            // No shorthand exists for these sides; they can only be built in
            // tests, never parsed from a document.
            (OneToMany, Owning) => "@OneToMany",
            (ManyToOne, Inverse) => "@ManyToOne",
        }
    }
}

impl Lombok {
    pub fn token_text(&self) -> &'static str {
        match self {
            Lombok::NoArgsConstructor => "@NoArgsConstructor",
            Lombok::RequiredArgsConstructor => "@RequiredArgsConstructor",
            Lombok::AllArgsConstructor => "@AllArgsConstructor",
            Lombok::Getter => "@Getter",
            Lombok::Setter => "@Setter",
            Lombok::ToString => "@ToString",
            Lombok::EqualsAndHashCode => "@EqualsAndHashCode",
            Lombok::Data => "@Data",
            Lombok::Value => "@Value",
            Lombok::Builder => "@Builder",
            Lombok::With => "@With",
            Lombok::NonNull => "@NonNull",
            Lombok::SneakyThrows => "@SneakyThrows",
            Lombok::Synchronized => "@Synchronized",
        }
    }
}

impl From<String> for Annotation {
    fn from(raw: String) -> Self {
        use {RelationKind::*, RelationSide::*};

        let relation = |kind, side| Annotation::Relation(Relation { kind, side });

        match raw.as_str() {
            "@OneToOneJoinColumn" => relation(OneToOne, Owning),
            "@OneToOneMappedBy" => relation(OneToOne, Inverse),
            "@OneToManyMappedBy" => relation(OneToMany, Inverse),
            "@ManyToOneJoinColumn" => relation(ManyToOne, Owning),
            "@ManyToManyJoinTable" => relation(ManyToMany, Owning),
            "@ManyToManyMappedBy" => relation(ManyToMany, Inverse),
            // Either spelling marks a string-backed enumeration.
            "@Enum" | "@Enumerated" => Annotation::Enumerated,
            "@Embedded" => Annotation::Embedded,
            "@NoArgsConstructor" => Annotation::Lombok(Lombok::NoArgsConstructor),
            "@RequiredArgsConstructor" => Annotation::Lombok(Lombok::RequiredArgsConstructor),
            "@AllArgsConstructor" => Annotation::Lombok(Lombok::AllArgsConstructor),
            "@Getter" => Annotation::Lombok(Lombok::Getter),
            "@Setter" => Annotation::Lombok(Lombok::Setter),
            "@ToString" => Annotation::Lombok(Lombok::ToString),
            "@EqualsAndHashCode" => Annotation::Lombok(Lombok::EqualsAndHashCode),
            "@Data" => Annotation::Lombok(Lombok::Data),
            "@Value" => Annotation::Lombok(Lombok::Value),
            "@Builder" => Annotation::Lombok(Lombok::Builder),
            "@With" => Annotation::Lombok(Lombok::With),
            "@NonNull" => Annotation::Lombok(Lombok::NonNull),
            "@SneakyThrows" => Annotation::Lombok(Lombok::SneakyThrows),
            "@Synchronized" => Annotation::Lombok(Lombok::Synchronized),
            _ => Annotation::Custom(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relation_shorthands_parse_to_kind_and_side() {
        assert_eq!(
            Annotation::from("@ManyToManyJoinTable".to_string()),
            Annotation::Relation(Relation {
                kind: RelationKind::ManyToMany,
                side: RelationSide::Owning,
            })
        );
        assert_eq!(
            Annotation::from("@OneToManyMappedBy".to_string()),
            Annotation::Relation(Relation {
                kind: RelationKind::OneToMany,
                side: RelationSide::Inverse,
            })
        );
    }

    #[test]
    fn enumeration_marker_accepts_both_spellings() {
        assert_eq!(Annotation::from("@Enum".to_string()), Annotation::Enumerated);
        assert_eq!(
            Annotation::from("@Enumerated".to_string()),
            Annotation::Enumerated
        );
    }

    #[test]
    fn unrecognized_tokens_round_trip_verbatim() {
        let token = Annotation::from("@Column(name = \"email\", unique = true)".to_string());
        assert_eq!(
            token.token_text(),
            "@Column(name = \"email\", unique = true)"
        );
        assert!(token.as_lombok().is_none());
    }
}
