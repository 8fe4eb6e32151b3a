//! Entity definition macro.
//!
//! Generates the struct, constructors and the [`Entity`](crate::Entity)
//! dispatch impl from a static property table, so concrete entity files
//! stay declarative (field lists are data, not logic).
//!
//! ```ignore
//! static BARCODE_PROPERTIES: &[PropertyDescriptor] = &[
//!     PropertyDescriptor::scalar("Type").in_services(&[ServiceKind::Barcode]),
//! ];
//!
//! carrier_entity! {
//!     /// Barcode range request parameters.
//!     pub struct Barcode in Domain {
//!         properties = BARCODE_PROPERTIES;
//!     }
//! }
//! ```
//!
//! An optional `normalize = path;` line names a
//! `fn(&str, Value) -> Result<Value, ModelError>` hook applied on every
//! `set` before storage, for types whose setters normalize input.

#[macro_export]
macro_rules! carrier_entity {
    (
        $(#[$meta:meta])*
        pub struct $name:ident in $namespace:ident {
            properties = $props:path;
            $(normalize = $normalize:path;)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            base: $crate::EntityBase,
        }

        impl $name {
            /// Short wire name of this entity type.
            pub const NAME: &'static str = stringify!($name);

            /// Creates an empty instance with all fields absent.
            #[must_use]
            pub fn new() -> Self {
                Self {
                    base: $crate::EntityBase::new(),
                }
            }

            /// Registry entry for this type.
            #[must_use]
            pub fn entity_type() -> $crate::EntityType {
                $crate::EntityType {
                    name: Self::NAME,
                    namespace: $crate::LogicalNamespace::$namespace,
                    properties: $props,
                    factory: || Box::new(Self::new()),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::Entity for $name {
            fn entity_name(&self) -> &'static str {
                Self::NAME
            }

            fn uid(&self) -> $crate::EntityUid {
                self.base.uid()
            }

            fn service(&self) -> Option<&$crate::ServiceContext> {
                self.base.service()
            }

            fn set_service(&mut self, ctx: $crate::ServiceContext) {
                self.base.set_service(ctx);
            }

            fn properties(&self) -> &'static [$crate::PropertyDescriptor] {
                $props
            }

            fn get(&self, name: &str) -> Option<&$crate::Value> {
                self.base.get(name)
            }

            fn set(
                &mut self,
                name: &str,
                value: $crate::Value,
            ) -> Result<(), $crate::ModelError> {
                $(let value = $normalize(name, value)?;)?
                self.base.set($props, name, value)
            }

            fn clone_box(&self) -> Box<dyn $crate::Entity> {
                Box::new(self.clone())
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }
        }
    };
}
