//! Accessors of registered types: structs, unions, enums, objects and interfaces.

use super::BaseInfo;
use crate::gtype::GType;
use crate::quark::Quark;
use crate::tags::TypeTag;
use crate::typelib::Blob;

impl BaseInfo {
    /// Runtime type identity. [`GType::NONE`] for registered types without
    /// a GType name; `None` for other kinds.
    pub fn gtype(&self) -> Option<GType> {
        let registration = self.blob()?.registration()?;
        Some(
            registration
                .type_name
                .as_deref()
                .map_or(GType::NONE, GType::from_name),
        )
    }

    /// GType name of a registered type.
    pub fn type_name(&self) -> Option<&str> {
        self.blob()?.registration()?.type_name.as_deref()
    }

    /// Byte size of a struct or union.
    pub fn size(&self) -> Option<usize> {
        match self.blob()? {
            Blob::Struct(b) => Some(b.size),
            Blob::Union(b) => Some(b.size),
            _ => None,
        }
    }

    /// Byte alignment of a struct or union.
    pub fn alignment(&self) -> Option<usize> {
        match self.blob()? {
            Blob::Struct(b) => Some(b.alignment),
            Blob::Union(b) => Some(b.alignment),
            _ => None,
        }
    }

    /// Whether a struct is the class or interface struct of another type.
    pub fn is_gtype_struct(&self) -> Option<bool> {
        match self.blob()? {
            Blob::Struct(b) => Some(b.is_gtype_struct),
            _ => None,
        }
    }

    /// Parent class of an object.
    pub fn parent(&self) -> Option<BaseInfo> {
        match self.blob()? {
            Blob::Object(b) => b.parent.as_ref().map(|r| self.follow(r)),
            _ => None,
        }
    }

    /// Class struct of an object, or interface struct of an interface.
    pub fn type_struct(&self) -> Option<BaseInfo> {
        let reference = match self.blob()? {
            Blob::Object(b) => b.class_struct.as_ref(),
            Blob::Interface(b) => b.iface_struct.as_ref(),
            _ => None,
        };
        reference.map(|r| self.follow(r))
    }

    /// Storage tag of an enum or flags type.
    pub fn storage_type(&self) -> Option<TypeTag> {
        match self.blob()? {
            Blob::Enum(b) | Blob::Flags(b) => Some(b.storage),
            _ => None,
        }
    }

    /// Error domain name of an enum.
    pub fn error_domain(&self) -> Option<&str> {
        match self.blob()? {
            Blob::Enum(b) | Blob::Flags(b) => b.error_domain.as_deref(),
            _ => None,
        }
    }

    /// Quark of the error domain of an enum.
    pub fn error_domain_quark(&self) -> Option<Quark> {
        self.error_domain().map(Quark::intern)
    }

    /// Numeric value of an enum member.
    pub fn value(&self) -> Option<i64> {
        match self.blob()? {
            Blob::Value(b) => Some(b.value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::info::Relation;
    use crate::tags::InfoType;
    use crate::typelib::TypelibBuilder;
    use crate::typelib::defs::*;

    fn typelib() -> crate::typelib::Typelib {
        TypelibBuilder::new("Reg", "1.0")
            .with_entry(StructDef::new("ObjClass").gtype_struct().with_size(136, 8))
            .with_entry(
                ObjectDef::new("Obj")
                    .with_gtype("RegObj")
                    .with_parent("GObject.Object")
                    .with_type_struct("ObjClass"),
            )
            .with_entry(UnionDef::new("Either").with_size(16, 8))
            .with_entry(
                EnumDef::new("Error")
                    .with_storage(TypeTag::Uint16)
                    .with_value("failed", -1)
                    .with_error_domain("reg-error-quark"),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn gtype_of_registered_types() {
        let typelib = typelib();
        let obj = typelib.find_by_name("Obj").unwrap();
        assert_eq!(obj.gtype(), Some(GType::from_name("RegObj")));
        assert_eq!(obj.type_name(), Some("RegObj"));

        let class = typelib.find_by_name("ObjClass").unwrap();
        assert_eq!(class.gtype(), Some(GType::NONE));

        let value = typelib
            .find_by_name("Error")
            .unwrap()
            .related(Relation::Values, 0)
            .unwrap();
        assert_eq!(value.gtype(), None);
        assert_eq!(value.value(), Some(-1));
    }

    #[test]
    fn struct_and_union_sizes() {
        let typelib = typelib();
        let class = typelib.find_by_name("ObjClass").unwrap();
        assert_eq!(class.size(), Some(136));
        assert_eq!(class.alignment(), Some(8));
        assert_eq!(class.is_gtype_struct(), Some(true));

        let either = typelib.find_by_name("Either").unwrap();
        assert_eq!(either.size(), Some(16));
        assert_eq!(either.is_gtype_struct(), None);
    }

    #[test]
    fn object_links() {
        let obj = typelib().find_by_name("Obj").unwrap();
        let class = obj.type_struct().unwrap();
        assert_eq!(class.info_type(), InfoType::Struct);
        assert_eq!(class.name(), Some("ObjClass"));
        assert_eq!(obj.parent().unwrap().info_type(), InfoType::Unresolved);
    }

    #[test]
    fn enum_storage_and_domain() {
        let error = typelib().find_by_name("Error").unwrap();
        assert_eq!(error.storage_type(), Some(TypeTag::Uint16));
        assert_eq!(error.error_domain(), Some("reg-error-quark"));
        assert_eq!(error.error_domain_quark(), Some(Quark::intern("reg-error-quark")));
    }
}
