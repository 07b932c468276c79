//! Text-format parameter binding for raw literal values
//!
//! Insert and upsert payloads carry each value as its bare literal text
//! (`2.2`, `O'Brien`); the target column types are unknown to this service.
//! `RawLiteral` binds that text as a *text-format* parameter accepted for
//! whatever type the server inferred, so the value is parsed server-side by
//! that type's own input function — the same interpretation a literal in
//! the statement text would get, without ever splicing the value into SQL.

use bytes::BytesMut;
use tokio_postgres::types::{to_sql_checked, Format, IsNull, ToSql, Type};

#[derive(Debug, Clone, Copy)]
pub struct RawLiteral<'a>(pub &'a str);

impl ToSql for RawLiteral<'_> {
    fn to_sql(
        &self,
        _ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn std::error::Error + Sync + Send>> {
        out.extend_from_slice(self.0.as_bytes());
        Ok(IsNull::No)
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }

    fn encode_format(&self, _ty: &Type) -> Format {
        Format::Text
    }

    to_sql_checked!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_the_literal_text_verbatim() {
        let mut buf = BytesMut::new();
        let result = RawLiteral("2.2").to_sql(&Type::NUMERIC, &mut buf).unwrap();
        assert!(matches!(result, IsNull::No));
        assert_eq!(&buf[..], b"2.2");
    }

    #[test]
    fn accepts_any_inferred_type() {
        assert!(<RawLiteral<'_> as ToSql>::accepts(&Type::NUMERIC));
        assert!(<RawLiteral<'_> as ToSql>::accepts(&Type::TEXT));
        assert!(<RawLiteral<'_> as ToSql>::accepts(&Type::TIMESTAMPTZ));
    }

    #[test]
    fn always_rides_in_text_format() {
        assert!(matches!(
            RawLiteral("x").encode_format(&Type::INT4),
            Format::Text
        ));
    }
}
