use springforge_core::schema::{Annotation, Relation, RelationKind, RelationSide};

/// Expands a field's annotation tokens into the concrete annotation text to
/// emit above the declaration. Pure function of its inputs; token order is
/// preserved and each token expands independently.
///
/// Each returned element is one annotation; a multi-line element carries its
/// own inner indentation and is re-indented as a block by the caller.
pub(crate) fn expand(annotations: &[Annotation], field_name: &str, field_ty: &str) -> Vec<String> {
    let mut lines = Vec::new();

    for annotation in annotations {
        match annotation {
            Annotation::Relation(relation) => {
                expand_relation(*relation, field_name, field_ty, &mut lines);
            }
            Annotation::Enumerated => lines.push("@Enumerated(EnumType.STRING)".to_string()),
            Annotation::Embedded => lines.push("@Embedded".to_string()),
            // Lombok markers and custom tokens pass through unchanged.
            annotation => lines.push(annotation.token_text().into_owned()),
        }
    }

    lines
}

fn expand_relation(
    relation: Relation,
    field_name: &str,
    field_ty: &str,
    lines: &mut Vec<String>,
) {
    use {RelationKind::*, RelationSide::*};

    match (relation.kind, relation.side) {
        (OneToOne, Owning) => {
            lines.push("@OneToOne".to_string());
            lines.push(format!("@JoinColumn(name = \"{field_name}_id\")"));
        }
        (OneToOne, Inverse) => {
            lines.push(format!("@OneToOne(mappedBy = \"{field_name}\")"));
        }
        (OneToMany, _) => {
            lines.push(format!("@OneToMany(mappedBy = \"{field_name}\")"));
        }
        (ManyToOne, _) => {
            lines.push("@ManyToOne".to_string());
            lines.push(format!("@JoinColumn(name = \"{field_name}_id\")"));
        }
        (ManyToMany, Owning) => {
            let target = element_type(field_ty).to_lowercase();
            lines.push("@ManyToMany".to_string());
            lines.push(format!(
                "@JoinTable(\n    name = \"{field_name}_{target}\",\n    joinColumns = @JoinColumn(name = \"{field_name}_id\"),\n    inverseJoinColumns = @JoinColumn(name = \"{target}_id\")\n)"
            ));
        }
        (ManyToMany, Inverse) => {
            lines.push(format!("@ManyToMany(mappedBy = \"{field_name}\")"));
        }
    }
}

/// Strips the outer container wrapper off a declared type:
/// `Set<Message>` -> `Message`, `Tag` -> `Tag`.
fn element_type(field_ty: &str) -> &str {
    match field_ty.split_once('<') {
        Some((_, inner)) => inner.trim_end_matches('>'),
        None => field_ty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(raw: &str) -> Annotation {
        Annotation::from(raw.to_string())
    }

    #[test]
    fn one_to_one_owning_side_gets_a_join_column() {
        assert_eq!(
            expand(&[token("@OneToOneJoinColumn")], "profile", "Profile"),
            vec!["@OneToOne", "@JoinColumn(name = \"profile_id\")"]
        );
    }

    #[test]
    fn inverse_sides_map_back_with_the_field_name() {
        assert_eq!(
            expand(&[token("@OneToOneMappedBy")], "owner", "User"),
            vec!["@OneToOne(mappedBy = \"owner\")"]
        );
        assert_eq!(
            expand(&[token("@OneToManyMappedBy")], "messages", "Set<Message>"),
            vec!["@OneToMany(mappedBy = \"messages\")"]
        );
        assert_eq!(
            expand(&[token("@ManyToManyMappedBy")], "tags", "Set<Tag>"),
            vec!["@ManyToMany(mappedBy = \"tags\")"]
        );
    }

    #[test]
    fn many_to_many_owning_side_derives_the_join_table() {
        let lines = expand(&[token("@ManyToManyJoinTable")], "tags", "Set<Tag>");

        assert_eq!(lines[0], "@ManyToMany");
        assert_eq!(
            lines[1],
            "@JoinTable(\n    name = \"tags_tag\",\n    joinColumns = @JoinColumn(name = \"tags_id\"),\n    inverseJoinColumns = @JoinColumn(name = \"tag_id\")\n)"
        );
    }

    #[test]
    fn unwrapped_types_are_their_own_element_type() {
        let lines = expand(&[token("@ManyToManyJoinTable")], "roles", "Role");
        assert!(lines[1].contains("name = \"roles_role\""));
        assert!(lines[1].contains("@JoinColumn(name = \"role_id\")"));
    }

    #[test]
    fn markers_and_custom_tokens_pass_through_in_order() {
        let lines = expand(
            &[token("@NonNull"), token("@Enum"), token("@Column(unique = true)")],
            "status",
            "Status",
        );

        assert_eq!(
            lines,
            vec![
                "@NonNull",
                "@Enumerated(EnumType.STRING)",
                "@Column(unique = true)"
            ]
        );
    }
}
