//! Backend DTOs for the case-management API.
//!
//! DESIGN
//! ======
//! The backend is loose about shapes: ids arrive as numbers or strings,
//! `activo` as `true`, `1` or `"1"`, and list endpoints wrap rows in `data`,
//! `items` or nothing at all. Decoding here is lenient and total so views
//! only ever see well-formed records.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Coerce a JSON id (string or number) to a string.
pub fn json_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Truthiness used by the backend for `activo` columns.
pub fn json_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_i64() == Some(1),
        Value::String(s) => s == "1",
        _ => false,
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(json_id).unwrap_or_default())
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(json_id))
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().is_some_and(json_flag))
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

fn deserialize_opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Review state of an expediente or indicio.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Estado {
    #[default]
    Pendiente,
    Aprobado,
    Rechazado,
}

impl Estado {
    pub const ALL: [Self; 3] = [Self::Pendiente, Self::Aprobado, Self::Rechazado];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pendiente => "pendiente",
            Self::Aprobado => "aprobado",
            Self::Rechazado => "rechazado",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|estado| estado.as_str() == raw)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pendiente => "Pendiente",
            Self::Aprobado => "Aprobado",
            Self::Rechazado => "Rechazado",
        }
    }
}

/// Unknown or missing states read as `pendiente`.
impl<'de> Deserialize<'de> for Estado {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value
            .as_ref()
            .and_then(Value::as_str)
            .and_then(Self::parse)
            .unwrap_or_default())
    }
}

/// A case record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawExpediente")]
pub struct Expediente {
    pub id: String,
    pub codigo: String,
    pub descripcion: String,
    pub fecha_registro: Option<String>,
    pub tecnico_id: String,
    pub tecnico_nombre: Option<String>,
    pub justificacion: Option<String>,
    pub estado: Estado,
    pub aprobador_id: Option<String>,
    pub aprobador_nombre: Option<String>,
    pub fecha_estado: Option<String>,
    pub activo: bool,
}

#[derive(Debug, Default, Deserialize)]
struct RawPerson {
    nombre: Option<String>,
    username: Option<String>,
}

/// Wire shape with every alias the backend has used for the approver name.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawExpediente {
    #[serde(deserialize_with = "deserialize_id")]
    id: String,
    #[serde(deserialize_with = "deserialize_text")]
    codigo: String,
    #[serde(deserialize_with = "deserialize_text")]
    descripcion: String,
    fecha_registro: Option<String>,
    #[serde(deserialize_with = "deserialize_id")]
    tecnico_id: String,
    tecnico_nombre: Option<String>,
    justificacion: Option<String>,
    estado: Estado,
    #[serde(deserialize_with = "deserialize_opt_id")]
    aprobador_id: Option<String>,
    aprobador_nombre: Option<String>,
    aprobador_username: Option<String>,
    nombre_aprobador: Option<String>,
    aprobador: Option<RawPerson>,
    fecha_estado: Option<String>,
    #[serde(deserialize_with = "deserialize_flag")]
    activo: bool,
}

impl From<RawExpediente> for Expediente {
    fn from(raw: RawExpediente) -> Self {
        let nested = raw.aprobador.unwrap_or_default();
        let aprobador_nombre = raw
            .aprobador_nombre
            .or(raw.aprobador_username)
            .or(raw.nombre_aprobador)
            .or(nested.nombre)
            .or(nested.username);
        Self {
            id: raw.id,
            codigo: raw.codigo,
            descripcion: raw.descripcion,
            fecha_registro: raw.fecha_registro,
            tecnico_id: raw.tecnico_id,
            tecnico_nombre: raw.tecnico_nombre,
            justificacion: raw.justificacion,
            estado: raw.estado,
            aprobador_id: raw.aprobador_id,
            aprobador_nombre,
            fecha_estado: raw.fecha_estado,
            activo: raw.activo,
        }
    }
}

/// An evidence item attached to an expediente.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Indicio {
    #[serde(deserialize_with = "deserialize_opt_id")]
    pub id: Option<String>,
    #[serde(deserialize_with = "deserialize_text")]
    pub codigo: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub expediente_codigo: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub descripcion: String,
    pub color: Option<String>,
    pub tamano: Option<String>,
    #[serde(deserialize_with = "deserialize_opt_number")]
    pub peso: Option<f64>,
    #[serde(deserialize_with = "deserialize_opt_id")]
    pub tecnico_id: Option<String>,
    pub fecha_registro: Option<String>,
    #[serde(deserialize_with = "deserialize_flag")]
    pub activo: bool,
    pub estado: Estado,
}

/// A user account as listed by coordinators.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Usuario {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub nombre: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub email: String,
    /// Raw role tag; accounts may carry roles the client does not model.
    #[serde(deserialize_with = "deserialize_text")]
    pub rol: String,
    #[serde(deserialize_with = "deserialize_flag")]
    pub activo: bool,
    pub creado_en: Option<String>,
    pub actualizado_en: Option<String>,
}

/// One page of list results plus the server-side total.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ListPage<T> {
    pub rows: Vec<T>,
    pub total: u64,
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self { rows: Vec::new(), total: 0 }
    }
}

fn json_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Decode a list envelope: `{data, total}`, `{items, total|totalCount}` or a
/// bare array. Rows that do not decode are skipped; unknown shapes yield an
/// empty page.
pub fn parse_list_page<T: DeserializeOwned>(value: &Value) -> ListPage<T> {
    let rows = match value {
        Value::Array(rows) => rows.as_slice(),
        Value::Object(map) => map
            .get("data")
            .and_then(Value::as_array)
            .or_else(|| map.get("items").and_then(Value::as_array))
            .map_or(&[][..], Vec::as_slice),
        _ => &[],
    };
    let decoded: Vec<T> = rows
        .iter()
        .filter_map(|row| serde_json::from_value(row.clone()).ok())
        .collect();
    let total = value
        .get("total")
        .and_then(json_count)
        .or_else(|| value.get("totalCount").and_then(json_count))
        .unwrap_or(decoded.len() as u64);
    ListPage { rows: decoded, total }
}

/// Decode a single-record response: the object itself, `{data: {...}}`, or
/// the first element of an array.
pub fn parse_single<T: DeserializeOwned>(value: &Value) -> Option<T> {
    let record = match value {
        Value::Array(rows) => rows.first()?,
        Value::Object(map) => match map.get("data") {
            Some(data @ Value::Object(_)) => data,
            _ => value,
        },
        _ => return None,
    };
    serde_json::from_value(record.clone()).ok()
}
