//! Wall list encoder: the "walls" object group, rectangles only.

use anyhow::{Context, Result};

use super::{MissingSection, find_group};
use crate::model::Wall;
use crate::parser::Element;

pub const GROUP: &str = "walls";

pub fn encode_walls(root: &Element) -> Result<Result<Vec<Wall>, MissingSection>> {
    let Some(group) = find_group(root, GROUP) else {
        return Ok(Err(MissingSection::ObjectGroup(GROUP)));
    };

    let walls = group
        .children_named("object")
        .enumerate()
        .map(|(i, object)| {
            parse_wall(object).with_context(|| {
                format!("wall {} (object id {})", i, object.attr("id").unwrap_or("?"))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Ok(walls))
}

fn parse_wall(object: &Element) -> Result<Wall> {
    Ok(Wall {
        x: object.require_attr("x")?.to_string(),
        y: object.require_attr("y")?.to_string(),
        width: object.require_attr("width")?.to_string(),
        height: object.require_attr("height")?.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;

    #[test]
    fn test_rectangles_ignore_type_and_props() {
        let root = parse_document(
            r#"<map><objectgroup name="walls">
  <object id="1" x="0" y="0" width="16" height="16"/>
  <object id="2" type="Ice" x="16" y="208" width="224" height="16">
   <properties><property name="slippery" value="true"/></properties>
  </object>
</objectgroup></map>"#,
        )
        .unwrap();

        let walls = encode_walls(&root).unwrap().unwrap();
        assert_eq!(
            walls,
            vec![
                Wall {
                    x: "0".into(),
                    y: "0".into(),
                    width: "16".into(),
                    height: "16".into(),
                },
                Wall {
                    x: "16".into(),
                    y: "208".into(),
                    width: "224".into(),
                    height: "16".into(),
                },
            ]
        );
    }

    #[test]
    fn test_group_properties_are_not_walls() {
        let root = parse_document(
            r#"<map><objectgroup name="walls">
  <properties><property name="solid" type="bool" value="true"/></properties>
  <object id="1" x="0" y="0" width="16" height="16"/>
</objectgroup></map>"#,
        )
        .unwrap();

        let walls = encode_walls(&root).unwrap().unwrap();
        assert_eq!(walls.len(), 1);
        assert_eq!(walls[0].width, "16");
    }

    #[test]
    fn test_missing_group() {
        let root = parse_document(r#"<map><objectgroup name="entities"/></map>"#).unwrap();
        assert_eq!(
            encode_walls(&root).unwrap(),
            Err(MissingSection::ObjectGroup("walls"))
        );
    }

    #[test]
    fn test_point_object_is_fatal() {
        let root = parse_document(
            r#"<map><objectgroup name="walls"><object id="3" x="4" y="4"><point/></object></objectgroup></map>"#,
        )
        .unwrap();
        let err = encode_walls(&root).unwrap_err();
        assert_eq!(err.to_string(), "wall 0 (object id 3)");
    }
}
