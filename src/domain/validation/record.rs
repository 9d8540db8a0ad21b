//! Record shape
//!
//! A record exposes its fields as an explicit descriptor list: name,
//! optional annotation, visibility and current value, in declaration order.
//! Implement `Record` by hand or with the `record!` macro.

use std::rc::Rc;
use std::sync::Arc;

use super::value::FieldValue;

/// Whether the walker may read a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

/// Descriptor for one record field
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub annotation: Option<String>,
    pub visibility: Visibility,
    pub value: FieldValue,
}

impl Field {
    /// A public field without annotation
    pub fn new(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            name: name.into(),
            annotation: None,
            visibility: Visibility::Public,
            value: value.into(),
        }
    }

    /// Attach the rule annotation, e.g. `"required,min=3"`
    pub fn rules(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    /// Hide the field from the walker
    pub fn private(mut self) -> Self {
        self.visibility = Visibility::Private;
        self
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

/// Anything that can be walked field by field
pub trait Record {
    /// Field descriptors in declaration order
    fn fields(&self) -> Vec<Field>;

    /// Name used in logs
    fn record_name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn fields(&self) -> Vec<Field> {
        (**self).fields()
    }

    fn record_name(&self) -> &str {
        (**self).record_name()
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn fields(&self) -> Vec<Field> {
        (**self).fields()
    }

    fn record_name(&self) -> &str {
        (**self).record_name()
    }
}

impl<R: Record + ?Sized> Record for Rc<R> {
    fn fields(&self) -> Vec<Field> {
        (**self).fields()
    }

    fn record_name(&self) -> &str {
        (**self).record_name()
    }
}

impl<R: Record + ?Sized> Record for Arc<R> {
    fn fields(&self) -> Vec<Field> {
        (**self).fields()
    }

    fn record_name(&self) -> &str {
        (**self).record_name()
    }
}

/// A bare descriptor list is a record too
impl Record for [Field] {
    fn fields(&self) -> Vec<Field> {
        self.to_vec()
    }

    fn record_name(&self) -> &str {
        "fields"
    }
}

impl Record for Vec<Field> {
    fn fields(&self) -> Vec<Field> {
        self.clone()
    }

    fn record_name(&self) -> &str {
        "fields"
    }
}

/// Implement `Record` for a struct by listing its annotated fields
///
/// ```
/// use bean_validator::{record, Record};
///
/// struct User {
///     name: String,
///     age: i32,
///     secret: String,
/// }
///
/// record!(User {
///     name: "required,non-blank",
///     age: "min=18,max=100",
///     #[private] secret: "required",
/// });
///
/// let user = User { name: "Ann".into(), age: 30, secret: String::new() };
/// assert_eq!(user.fields().len(), 3);
/// ```
#[macro_export]
macro_rules! record {
    ($ty:ident { $($body:tt)* }) => {
        impl $crate::Record for $ty {
            fn fields(&self) -> ::std::vec::Vec<$crate::Field> {
                let mut fields = ::std::vec::Vec::new();
                $crate::record!(@fields self, fields, $($body)*);
                fields
            }

            fn record_name(&self) -> &str {
                stringify!($ty)
            }
        }
    };
    (@fields $self:ident, $fields:ident, #[private] $name:ident : $rules:literal $(, $($rest:tt)*)?) => {
        $fields.push(
            $crate::Field::new(stringify!($name), ::std::clone::Clone::clone(&$self.$name))
                .rules($rules)
                .private(),
        );
        $($crate::record!(@fields $self, $fields, $($rest)*);)?
    };
    (@fields $self:ident, $fields:ident, $name:ident : $rules:literal $(, $($rest:tt)*)?) => {
        $fields.push(
            $crate::Field::new(stringify!($name), ::std::clone::Clone::clone(&$self.$name))
                .rules($rules),
        );
        $($crate::record!(@fields $self, $fields, $($rest)*);)?
    };
    (@fields $self:ident, $fields:ident, $name:ident $(, $($rest:tt)*)?) => {
        $fields.push($crate::Field::new(
            stringify!($name),
            ::std::clone::Clone::clone(&$self.$name),
        ));
        $($crate::record!(@fields $self, $fields, $($rest)*);)?
    };
    (@fields $self:ident, $fields:ident, ) => {};
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Account {
        login: String,
        age: u8,
        tags: Vec<String>,
        nickname: Option<String>,
        token: String,
    }

    crate::record!(Account {
        login: "required",
        age: "min=18",
        tags,
        nickname: "non-null",
        #[private] token: "required",
    });

    fn account() -> Account {
        Account {
            login: "ann".to_string(),
            age: 20,
            tags: vec!["a".to_string()],
            nickname: None,
            token: String::new(),
        }
    }

    #[test]
    fn macro_lists_fields_in_order() {
        let fields = account().fields();
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["login", "age", "tags", "nickname", "token"]);
    }

    #[test]
    fn macro_carries_annotations_and_visibility() {
        let fields = account().fields();
        assert_eq!(fields[0].annotation.as_deref(), Some("required"));
        assert_eq!(fields[2].annotation, None);
        assert!(fields[3].value.is_nil());
        assert!(!fields[4].is_public());
        assert_eq!(fields[1].value, FieldValue::Uint(20));
    }

    #[test]
    fn references_delegate() {
        let acc = account();
        let boxed: Box<Account> = Box::new(account());
        assert_eq!((&acc).fields().len(), 5);
        assert_eq!(boxed.fields().len(), 5);
        assert_eq!(Arc::new(account()).record_name(), "Account");
    }

    #[test]
    fn descriptor_lists_are_records() {
        let fields = vec![Field::new("a", 1).rules("min=0"), Field::new("b", "x").private()];
        assert_eq!(fields.fields(), fields);
        assert_eq!(fields.as_slice().fields().len(), 2);
    }
}
