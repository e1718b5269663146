//! XML schema loader.
//!
//! This module parses a schema document into the [`Model`] consumed by the
//! code generators. Items are collected first and property types are
//! resolved afterwards, so properties may reference items declared later in
//! the document.

use crate::error::ParseError;
use crate::types::{Entity, Enum, Item, ItemKind, JsonObject, Model, Prop, PropType, Union};
use indexmap::IndexMap;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Name of the implicit primary identifier property of every entity.
pub const ID_PROPERTY: &str = "id";

type Attributes = IndexMap<String, String>;

/// Parses a schema document from a string.
///
/// # Arguments
/// * `xml` - Schema document content
///
/// # Returns
/// Loaded model or parse error.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed, contains unknown elements,
/// declares an item twice or uses an invalid type expression.
pub fn parse_model(xml: &str) -> Result<Model, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut items: IndexMap<String, RawItem> = IndexMap::new();
    let mut seen_schema = false;
    let mut in_schema = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                match name {
                    "schema" if !seen_schema => {
                        seen_schema = true;
                        in_schema = true;
                    }
                    "entity" | "object" | "union" | "enum" if in_schema => {
                        let attrs = read_attributes(e, name)?;
                        let (item_name, item) = parse_item(&mut reader, name, attrs, true)?;
                        add_item(&mut items, item_name, item)?;
                    }
                    other => {
                        return Err(ParseError::unknown_element(other, context(in_schema)));
                    }
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                match name {
                    "schema" if !seen_schema => seen_schema = true,
                    "entity" | "object" | "union" | "enum" if in_schema => {
                        let attrs = read_attributes(e, name)?;
                        let (item_name, item) = parse_item(&mut reader, name, attrs, false)?;
                        add_item(&mut items, item_name, item)?;
                    }
                    other => {
                        return Err(ParseError::unknown_element(other, context(in_schema)));
                    }
                }
            }
            Ok(Event::End(_)) => in_schema = false,
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    if !seen_schema {
        return Err(ParseError::structure("no schema element found"));
    }

    resolve(items)
}

/// Reads and parses a schema document from a file.
///
/// # Errors
/// Returns `ParseError` if the file cannot be read or parsed.
pub fn parse_model_file(path: &std::path::Path) -> Result<Model, ParseError> {
    let xml = std::fs::read_to_string(path)?;
    parse_model(&xml)
}

const fn context(in_schema: bool) -> &'static str {
    if in_schema { "schema" } else { "document" }
}

fn add_item(
    items: &mut IndexMap<String, RawItem>,
    name: String,
    item: RawItem,
) -> Result<(), ParseError> {
    if items.contains_key(&name) {
        return Err(ParseError::duplicate("item", name));
    }
    items.insert(name, item);
    Ok(())
}

/// Item as declared, with property types not yet resolved.
#[derive(Debug)]
enum RawItem {
    Entity {
        description: Option<String>,
        properties: Vec<RawProperty>,
    },
    Object {
        description: Option<String>,
        properties: Vec<RawProperty>,
    },
    Union(Union),
    Enum(Enum),
}

impl RawItem {
    const fn kind(&self) -> ItemKind {
        match self {
            Self::Entity { .. } => ItemKind::Entity,
            Self::Object { .. } => ItemKind::Object,
            Self::Union(_) => ItemKind::Union,
            Self::Enum(_) => ItemKind::Enum,
        }
    }
}

#[derive(Debug)]
struct RawProperty {
    name: String,
    ty: TypeRef,
    derived_from: Option<String>,
    description: Option<String>,
}

/// Type expression such as `String`, `Int!` or `[Transfer!]!`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TypeRef {
    expr: TypeExpr,
    nullable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TypeExpr {
    Named(String),
    List(Box<TypeRef>),
}

fn parse_type_ref(s: &str) -> Option<TypeRef> {
    let s = s.trim();
    let (body, nullable) = match s.strip_suffix('!') {
        Some(body) => (body.trim_end(), false),
        None => (s, true),
    };

    if let Some(inner) = body.strip_prefix('[') {
        let item = parse_type_ref(inner.strip_suffix(']')?)?;
        return Some(TypeRef {
            expr: TypeExpr::List(Box::new(item)),
            nullable,
        });
    }

    let valid = !body.is_empty() && body.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    valid.then(|| TypeRef {
        expr: TypeExpr::Named(body.to_string()),
        nullable,
    })
}

/// Parses one item element (already opened) and its children.
fn parse_item(
    reader: &mut Reader<&[u8]>,
    element: &str,
    attrs: Attributes,
    has_body: bool,
) -> Result<(String, RawItem), ParseError> {
    let name = required(&attrs, element, "name")?;
    let description = attrs.get("description").cloned();

    let children = match (element, has_body) {
        (_, false) => Vec::new(),
        ("entity" | "object", true) => read_children(reader, element, "property")?,
        ("union", true) => read_children(reader, element, "variant")?,
        (_, true) => read_children(reader, element, "value")?,
    };

    let item = match element {
        "entity" | "object" => {
            let properties = children
                .iter()
                .map(parse_property)
                .collect::<Result<Vec<_>, _>>()?;
            if element == "entity" {
                RawItem::Entity {
                    description,
                    properties,
                }
            } else {
                RawItem::Object {
                    description,
                    properties,
                }
            }
        }
        "union" => {
            let mut variants: Vec<String> = Vec::with_capacity(children.len());
            for attrs in &children {
                let variant = required(attrs, "variant", "name")?;
                if variants.contains(&variant) {
                    return Err(ParseError::duplicate(
                        "variant",
                        format!("{name}.{variant}"),
                    ));
                }
                variants.push(variant);
            }
            RawItem::Union(Union {
                description,
                variants,
            })
        }
        _ => {
            let mut e = Enum {
                description,
                ..Enum::default()
            };
            for attrs in &children {
                let value = required(attrs, "value", "name")?;
                if !e.values.insert(value.clone()) {
                    return Err(ParseError::duplicate("enum value", format!("{name}.{value}")));
                }
            }
            RawItem::Enum(e)
        }
    };

    Ok((name, item))
}

/// Parses the attributes of a property element.
fn parse_property(attrs: &Attributes) -> Result<RawProperty, ParseError> {
    let name = required(attrs, "property", "name")?;
    let type_attr = required(attrs, "property", "type")?;
    let ty = parse_type_ref(&type_attr)
        .ok_or_else(|| ParseError::invalid_attr("property", "type", type_attr.as_str()))?;

    Ok(RawProperty {
        name,
        ty,
        derived_from: attrs.get("derivedFrom").cloned(),
        description: attrs.get("description").cloned(),
    })
}

/// Reads the children of `parent` up to its end tag, returning the
/// attributes of each `child` element.
fn read_children(
    reader: &mut Reader<&[u8]>,
    parent: &str,
    child: &str,
) -> Result<Vec<Attributes>, ParseError> {
    let mut buf = Vec::new();
    let mut children = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                if name != child {
                    return Err(ParseError::unknown_element(name, parent));
                }
                children.push(read_attributes(e, child)?);
            }
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                if name != child {
                    return Err(ParseError::unknown_element(name, parent));
                }
                children.push(read_attributes(e, child)?);
                skip_to_end(reader)?;
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => {
                return Err(ParseError::structure(format!(
                    "unexpected end of document inside <{parent}>"
                )));
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(children)
}

/// Collects the attributes of an element, resolving character references.
fn read_attributes(e: &BytesStart<'_>, element: &str) -> Result<Attributes, ParseError> {
    let mut attrs = Attributes::new();

    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = std::str::from_utf8(&attr.value)?;
        let value = quick_xml::escape::unescape(value)
            .map_err(|_| ParseError::invalid_attr(element, key, value))?;
        attrs.insert(key.to_string(), value.into_owned());
    }

    Ok(attrs)
}

fn required(attrs: &Attributes, element: &str, attribute: &str) -> Result<String, ParseError> {
    attrs
        .get(attribute)
        .filter(|value| !value.is_empty())
        .cloned()
        .ok_or_else(|| ParseError::missing_attr(element, attribute))
}

/// Skips to the end tag of the element that was just opened.
fn skip_to_end(reader: &mut Reader<&[u8]>) -> Result<(), ParseError> {
    let mut buf = Vec::new();
    let mut depth = 1usize;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Resolves property type expressions against the declared items.
fn resolve(items: IndexMap<String, RawItem>) -> Result<Model, ParseError> {
    let kinds: IndexMap<String, ItemKind> = items
        .iter()
        .map(|(name, item)| (name.clone(), item.kind()))
        .collect();

    let mut model = Model::new();
    for (name, item) in items {
        let item = match item {
            RawItem::Entity {
                description,
                properties,
            } => {
                let mut properties = resolve_properties(&name, &properties, &kinds)?;
                if !properties.contains_key(ID_PROPERTY) {
                    properties.shift_insert(
                        0,
                        ID_PROPERTY.to_string(),
                        Prop::new(PropType::scalar("ID"), false),
                    );
                }
                Item::Entity(Entity {
                    description,
                    properties,
                })
            }
            RawItem::Object {
                description,
                properties,
            } => Item::Object(JsonObject {
                description,
                properties: resolve_properties(&name, &properties, &kinds)?,
            }),
            RawItem::Union(u) => Item::Union(u),
            RawItem::Enum(e) => Item::Enum(e),
        };
        model.insert(name, item);
    }

    Ok(model)
}

fn resolve_properties(
    owner: &str,
    properties: &[RawProperty],
    kinds: &IndexMap<String, ItemKind>,
) -> Result<IndexMap<String, Prop>, ParseError> {
    let mut resolved = IndexMap::with_capacity(properties.len());

    for raw in properties {
        let mut prop = match &raw.derived_from {
            Some(field) => resolve_relation(raw, field, kinds)?,
            None => resolve_type(&raw.ty, kinds),
        };
        prop.description.clone_from(&raw.description);

        if resolved.insert(raw.name.clone(), prop).is_some() {
            return Err(ParseError::duplicate(
                "property",
                format!("{owner}.{}", raw.name),
            ));
        }
    }

    Ok(resolved)
}

fn resolve_type(type_ref: &TypeRef, kinds: &IndexMap<String, ItemKind>) -> Prop {
    let ty = match &type_ref.expr {
        TypeExpr::Named(name) => match kinds.get(name) {
            Some(ItemKind::Entity) => PropType::Fk {
                foreign_entity: name.clone(),
            },
            Some(ItemKind::Object) => PropType::Object { name: name.clone() },
            Some(ItemKind::Union) => PropType::Union { name: name.clone() },
            Some(ItemKind::Enum) => PropType::Enum { name: name.clone() },
            None => PropType::scalar(name.as_str()),
        },
        TypeExpr::List(item) => PropType::list(resolve_type(item, kinds)),
    };
    Prop::new(ty, type_ref.nullable)
}

/// Resolves a `derivedFrom` property, which must be a list of entities.
fn resolve_relation(
    raw: &RawProperty,
    field: &str,
    kinds: &IndexMap<String, ItemKind>,
) -> Result<Prop, ParseError> {
    if let TypeExpr::List(item) = &raw.ty.expr
        && let TypeExpr::Named(entity) = &item.expr
        && kinds.get(entity) == Some(&ItemKind::Entity)
    {
        let ty = PropType::ListRelation {
            entity: entity.clone(),
            field: field.to_string(),
        };
        return Ok(Prop::new(ty, raw.ty.nullable));
    }
    Err(ParseError::invalid_attr("property", "derivedFrom", field))
}
