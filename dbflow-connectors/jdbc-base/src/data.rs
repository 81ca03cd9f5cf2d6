use dbflow_connectors_base::common::StaticTypeCatalog;
use dbflow_core::{
    data::{DbType, ResolvedDbType},
    err::{self, bail, Result},
};
use lazy_static::lazy_static;

/// Constants representing JDBC data types.
/// The values are those of the java.sql.Types class, which drivers
/// report through the statement parameter metadata.
///
/// @see https://docs.oracle.com/javase/8/docs/api/constant-values.html#java.sql.Types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum JdbcType {
    Bit = -7,
    TinyInt = -6,
    SmallInt = 5,
    Integer = 4,
    BigInt = -5,
    Float = 6,
    Real = 7,
    Double = 8,
    Numeric = 2,
    Decimal = 3,
    Char = 1,
    Varchar = 12,
    LongVarchar = -1,
    Date = 91,
    Time = 92,
    Timestamp = 93,
    Binary = -2,
    VarBinary = -3,
    LongVarBinary = -4,
    Null = 0,
    Other = 1111,
    JavaObject = 2000,
    Distinct = 2001,
    Struct = 2002,
    Array = 2003,
    Blob = 2004,
    Clob = 2005,
    Ref = 2006,
    DataLink = 70,
    Boolean = 16,
    RowId = -8,
    NChar = -15,
    NVarchar = -9,
    LongNVarchar = -16,
    NClob = 2011,
    SqlXml = 2009,
    RefCursor = 2012,
    TimeWithTimezone = 2013,
    TimestampWithTimezone = 2014,
}

impl JdbcType {
    pub const ALL: [JdbcType; 39] = [
        JdbcType::Bit,
        JdbcType::TinyInt,
        JdbcType::SmallInt,
        JdbcType::Integer,
        JdbcType::BigInt,
        JdbcType::Float,
        JdbcType::Real,
        JdbcType::Double,
        JdbcType::Numeric,
        JdbcType::Decimal,
        JdbcType::Char,
        JdbcType::Varchar,
        JdbcType::LongVarchar,
        JdbcType::Date,
        JdbcType::Time,
        JdbcType::Timestamp,
        JdbcType::Binary,
        JdbcType::VarBinary,
        JdbcType::LongVarBinary,
        JdbcType::Null,
        JdbcType::Other,
        JdbcType::JavaObject,
        JdbcType::Distinct,
        JdbcType::Struct,
        JdbcType::Array,
        JdbcType::Blob,
        JdbcType::Clob,
        JdbcType::Ref,
        JdbcType::DataLink,
        JdbcType::Boolean,
        JdbcType::RowId,
        JdbcType::NChar,
        JdbcType::NVarchar,
        JdbcType::LongNVarchar,
        JdbcType::NClob,
        JdbcType::SqlXml,
        JdbcType::RefCursor,
        JdbcType::TimeWithTimezone,
        JdbcType::TimestampWithTimezone,
    ];

    pub fn id(&self) -> i32 {
        *self as i32
    }

    /// The standard SQL name of the type
    pub fn name(&self) -> &'static str {
        match self {
            JdbcType::Bit => "BIT",
            JdbcType::TinyInt => "TINYINT",
            JdbcType::SmallInt => "SMALLINT",
            JdbcType::Integer => "INTEGER",
            JdbcType::BigInt => "BIGINT",
            JdbcType::Float => "FLOAT",
            JdbcType::Real => "REAL",
            JdbcType::Double => "DOUBLE",
            JdbcType::Numeric => "NUMERIC",
            JdbcType::Decimal => "DECIMAL",
            JdbcType::Char => "CHAR",
            JdbcType::Varchar => "VARCHAR",
            JdbcType::LongVarchar => "LONGVARCHAR",
            JdbcType::Date => "DATE",
            JdbcType::Time => "TIME",
            JdbcType::Timestamp => "TIMESTAMP",
            JdbcType::Binary => "BINARY",
            JdbcType::VarBinary => "VARBINARY",
            JdbcType::LongVarBinary => "LONGVARBINARY",
            JdbcType::Null => "NULL",
            JdbcType::Other => "OTHER",
            JdbcType::JavaObject => "JAVA_OBJECT",
            JdbcType::Distinct => "DISTINCT",
            JdbcType::Struct => "STRUCT",
            JdbcType::Array => "ARRAY",
            JdbcType::Blob => "BLOB",
            JdbcType::Clob => "CLOB",
            JdbcType::Ref => "REF",
            JdbcType::DataLink => "DATALINK",
            JdbcType::Boolean => "BOOLEAN",
            JdbcType::RowId => "ROWID",
            JdbcType::NChar => "NCHAR",
            JdbcType::NVarchar => "NVARCHAR",
            JdbcType::LongNVarchar => "LONGNVARCHAR",
            JdbcType::NClob => "NCLOB",
            JdbcType::SqlXml => "SQLXML",
            JdbcType::RefCursor => "REF_CURSOR",
            JdbcType::TimeWithTimezone => "TIME_WITH_TIMEZONE",
            JdbcType::TimestampWithTimezone => "TIMESTAMP_WITH_TIMEZONE",
        }
    }

    /// Creates a vendor type which is bound using this JDBC type
    pub fn named(&self, vendor_name: impl Into<String>) -> ResolvedDbType {
        ResolvedDbType::new(self.id(), vendor_name)
    }
}

impl TryFrom<i32> for JdbcType {
    type Error = err::Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match JdbcType::ALL.iter().find(|t| t.id() == value) {
            Some(t) => Ok(*t),
            None => bail!("Unrecognized JDBC data type constant: {}", value),
        }
    }
}

impl From<JdbcType> for ResolvedDbType {
    fn from(t: JdbcType) -> Self {
        ResolvedDbType::new(t.id(), t.name())
    }
}

impl From<JdbcType> for DbType {
    fn from(t: JdbcType) -> Self {
        DbType::Concrete(t.into())
    }
}

lazy_static! {
    static ref STANDARD_TYPES: StaticTypeCatalog =
        StaticTypeCatalog::new(JdbcType::ALL.iter().map(|t| (*t).into()).collect());
}

/// The types defined by the JDBC standard, supported by every driver
pub fn standard_type_catalog() -> StaticTypeCatalog {
    STANDARD_TYPES.clone()
}
