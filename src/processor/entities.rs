//! Entity list encoder: the "entities" object group.

use anyhow::{Context, Result};

use super::{MissingSection, find_group};
use crate::model::Entity;
use crate::parser::Element;

pub const GROUP: &str = "entities";

pub fn encode_entities(root: &Element) -> Result<Result<Vec<Entity>, MissingSection>> {
    let Some(group) = find_group(root, GROUP) else {
        return Ok(Err(MissingSection::ObjectGroup(GROUP)));
    };

    let mut entities = Vec::new();
    for (i, object) in group.children_named("object").enumerate() {
        let entity = parse_entity(object).with_context(|| {
            format!(
                "entity {} (object id {})",
                i,
                object.attr("id").unwrap_or("?")
            )
        })?;
        entities.push(entity);
    }

    Ok(Ok(entities))
}

fn parse_entity(object: &Element) -> Result<Entity> {
    // Tiled 1.9+ writes the type tag as `class`
    let kind = match object.attr("type") {
        Some(kind) => kind,
        None => object.require_attr("class")?,
    };

    Ok(Entity {
        kind: kind.to_string(),
        x: object.require_attr("x")?.to_string(),
        y: object.require_attr("y")?.to_string(),
        width: object.require_attr("width")?.to_string(),
        height: object.require_attr("height")?.to_string(),
        props: parse_props(object)?,
    })
}

/// `(name, value)` pairs of the object's property list, in source order.
fn parse_props(object: &Element) -> Result<Vec<(String, String)>> {
    let Some(props) = object.child("properties") else {
        return Ok(Vec::new());
    };

    props
        .children_named("property")
        .map(|p| -> Result<(String, String)> {
            let name = p.require_attr("name")?;
            // multi-line string properties keep their value as element text
            let value = p.attr("value").unwrap_or(p.text.as_str());
            Ok((name.to_string(), value.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;

    fn entities(xml: &str) -> Result<Result<Vec<Entity>, MissingSection>> {
        encode_entities(&parse_document(xml).unwrap())
    }

    #[test]
    fn test_entity_without_props() {
        let list = entities(
            r#"<map><objectgroup name="entities">
  <object id="1" type="Spawn" x="10" y="20" width="8" height="8"/>
</objectgroup></map>"#,
        )
        .unwrap()
        .unwrap();

        assert_eq!(
            list,
            vec![Entity {
                kind: "Spawn".into(),
                x: "10".into(),
                y: "20".into(),
                width: "8".into(),
                height: "8".into(),
                props: vec![],
            }]
        );
    }

    #[test]
    fn test_props_in_source_order() {
        let list = entities(
            r#"<map><objectgroup name="entities">
  <object id="4" class="Door" x="1.5" y="2" width="16" height="32">
   <properties>
    <property name="target" value="7"/>
    <property name="locked" type="bool" value="true"/>
    <property name="note">two
lines</property>
   </properties>
  </object>
  <object id="5" type="Coin" x="0" y="0" width="4" height="4"/>
</objectgroup></map>"#,
        )
        .unwrap()
        .unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].kind, "Door");
        assert_eq!(list[0].x, "1.5");
        assert_eq!(
            list[0].props,
            vec![
                ("target".to_string(), "7".to_string()),
                ("locked".to_string(), "true".to_string()),
                ("note".to_string(), "two\nlines".to_string()),
            ]
        );
        assert_eq!(list[1].kind, "Coin");
        assert!(list[1].props.is_empty());
    }

    #[test]
    fn test_group_properties_are_not_entities() {
        let list = entities(
            r#"<map><objectgroup name="entities">
  <properties><property name="layerTint" value="red"/></properties>
  <object id="2" type="Key" x="8" y="8" width="8" height="8"/>
</objectgroup></map>"#,
        )
        .unwrap()
        .unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(list[0].kind, "Key");
        assert!(list[0].props.is_empty());
    }

    #[test]
    fn test_missing_group() {
        let res = entities(r#"<map><objectgroup name="walls"/></map>"#).unwrap();
        assert_eq!(res, Err(MissingSection::ObjectGroup("entities")));
    }

    #[test]
    fn test_missing_attribute_is_fatal() {
        let err = entities(
            r#"<map><objectgroup name="entities"><object id="9" type="A" x="0" y="0" width="1"/></objectgroup></map>"#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "entity 0 (object id 9)");
        assert_eq!(
            err.root_cause().to_string(),
            "<object> missing `height` attribute"
        );
    }
}
