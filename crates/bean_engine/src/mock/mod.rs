//! Sample data of bean types, for documentation generators.
//!
//! Built from `#[bean(mock(...))]` metadata alone; no instance is needed.

use core::any::TypeId;

use serde_json::{Value, json};

use crate::Bean;
use crate::info::{BeanInfo, FieldDescriptor, FieldType, MockType};
use crate::value::RawMap;

/// Returns the mock data of `T`, keyed by declared key.
///
/// Every entry is `{ "value", "comment", "type" }`; enum fields add
/// `"enums"`. Nested beans and bean lists recurse into the child type,
/// scalar fields without mock metadata are left out.
///
/// # Examples
///
/// ```
/// use bean_engine::{derive::Bean, mock::mock_data};
/// use serde_json::json;
///
/// #[derive(Bean, Default)]
/// struct Book {
///     #[bean(mock(value = "Dune", comment = "Book title"))]
///     name: String,
/// }
///
/// #[derive(Bean, Default)]
/// struct Shelf {
///     #[bean(mock(value = 3, comment = "Shelf number", kind = Int))]
///     number: u32,
///     #[bean(mock(comment = "Books on the shelf"))]
///     books: Vec<Book>,
///     note: String,
/// }
///
/// let data = serde_json::Value::Object(mock_data::<Shelf>());
/// assert_eq!(data, json!({
///     "number": { "value": 3, "comment": "Shelf number", "type": "int" },
///     "books": {
///         "value": [{ "name": { "value": "Dune", "comment": "Book title", "type": "string" } }],
///         "comment": "Books on the shelf",
///         "type": "object_array",
///     },
/// }));
/// ```
pub fn mock_data<T: Bean>() -> RawMap {
    let mut stack = Vec::new();
    mock_bean(T::bean_info(), &mut stack)
}

fn mock_bean(info: &'static BeanInfo, stack: &mut Vec<TypeId>) -> RawMap {
    stack.push(info.type_id());
    let map = info
        .iter()
        .filter_map(|field| Some((field.declared_key().to_owned(), mock_field(field, stack)?)))
        .collect();
    stack.pop();
    map
}

fn mock_field(field: &FieldDescriptor, stack: &mut Vec<TypeId>) -> Option<Value> {
    let spec = field.mock();
    let comment = spec.map_or("", |s| s.comment());

    let (value, kind) = match field.field_type() {
        FieldType::Bean(f) => (nested(f(), stack), MockType::Object),
        FieldType::List(f) => (Value::Array(vec![nested(f(), stack)]), MockType::ObjectArray),
        FieldType::Union(f) => {
            let variants = f()
                .iter()
                .map(|v| (v.tag().to_owned(), nested(v.bean_info(), stack)))
                .collect();
            (Value::Object(variants), MockType::Object)
        }
        FieldType::Scalar => match field.list_element() {
            Some(element) => (Value::Array(vec![nested(element, stack)]), MockType::ObjectArray),
            None => {
                let spec = spec?;
                (spec.value().clone(), spec.kind())
            }
        },
    };

    let mut entry = json!({
        "value": value,
        "comment": comment,
        "type": kind.as_str(),
    });
    if let Some(enums) = spec.and_then(|s| s.enums()) {
        entry["enums"] = enums
            .iter()
            .map(|(k, v)| ((*k).to_owned(), Value::from(*v)))
            .collect::<RawMap>()
            .into();
    }
    Some(entry)
}

// Self-referential types stop at the first repetition.
fn nested(info: &'static BeanInfo, stack: &mut Vec<TypeId>) -> Value {
    if stack.contains(&info.type_id()) {
        return Value::Null;
    }
    Value::Object(mock_bean(info, stack))
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::{mock_data, mock_field};
    use crate::derive::{Bean, BeanUnion};
    use crate::info::{FieldDescriptor, MockEnum};

    enum Level {}

    impl MockEnum for Level {
        fn mock_options() -> &'static [(&'static str, &'static str)] {
            &[("1", "Low"), ("2", "High")]
        }
    }

    #[derive(Bean, Default)]
    #[bean(rename_all = "camelCase")]
    struct Node {
        #[bean(mock(value = "root", comment = "Node label"))]
        node_label: String,
        #[bean(mock(value = 1, comment = "Priority", enums = Level))]
        level: u8,
        #[bean(mock(comment = "Children"))]
        children: Vec<Node>,
    }

    #[test]
    fn self_reference_stops() {
        let data = Value::Object(mock_data::<Node>());
        assert_eq!(
            data,
            json!({
                "nodeLabel": { "value": "root", "comment": "Node label", "type": "string" },
                "level": {
                    "value": 1,
                    "comment": "Priority",
                    "type": "enum",
                    "enums": { "1": "Low", "2": "High" },
                },
                "children": { "value": [null], "comment": "Children", "type": "object_array" },
            })
        );
    }

    #[derive(Bean, Default)]
    struct Circle {
        #[bean(mock(value = 2.5))]
        radius: f64,
    }

    #[derive(Bean, Default)]
    struct Square {
        #[bean(mock(value = true, comment = "Filled"))]
        filled: bool,
    }

    #[derive(BeanUnion)]
    enum Shape {
        Circle(Circle),
        Square(Square),
    }

    #[derive(Bean, Default)]
    struct Drawing {
        kind: String,
        #[bean(union = "kind", mock(comment = "Shape settings"))]
        shape: Option<Shape>,
    }

    #[test]
    fn unions_list_every_variant() {
        let data = mock_data::<Drawing>();
        assert!(!data.contains_key("kind"));
        assert_eq!(
            data["shape"],
            json!({
                "value": {
                    "circle": { "radius": { "value": 2.5, "comment": "", "type": "float" } },
                    "square": { "filled": { "value": true, "comment": "Filled", "type": "bool" } },
                },
                "comment": "Shape settings",
                "type": "object",
            })
        );
    }

    #[derive(Bean, Default)]
    struct Gallery {
        #[bean(list = Circle, mock(comment = "Circles"))]
        circles: Option<Vec<Circle>>,
    }

    #[test]
    fn declared_list_elements() {
        assert_eq!(
            mock_data::<Gallery>()["circles"],
            json!({
                "value": [{ "radius": { "value": 2.5, "comment": "", "type": "float" } }],
                "comment": "Circles",
                "type": "object_array",
            })
        );

        // A descriptor over raw values still mocks its declared element.
        let raw = FieldDescriptor::new::<Value>("circles").with_list::<Vec<Circle>, Circle>();
        let entry = mock_field(&raw, &mut Vec::new()).unwrap();
        assert_eq!(entry["type"], "object_array");
        assert_eq!(entry["value"][0]["radius"]["value"], 2.5);
    }
}
