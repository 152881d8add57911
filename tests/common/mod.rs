//! Common test utilities for integration tests

use serde_json::{json, Value};

/// Builds a complete raw marketplace record with the given id and close date.
#[allow(dead_code)]
pub fn raw_tender(id: &str, close_at: &str) -> Value {
    json!({
        "CodigoExterno": id,
        "Nombre": format!("Licitación {id}"),
        "NombreOrganismo": "Ministerio de Obras Públicas",
        "Estado": "Publicada",
        "FechaPublicacion": "2024-01-02T09:00:00",
        "FechaCierre": close_at,
        "Region": "Metropolitana",
        "Url": format!("https://example.com/tender/{id}")
    })
}

/// Builds a complete raw record with an explicit buyer, for overwrite checks.
#[allow(dead_code)]
pub fn raw_tender_from(id: &str, close_at: &str, buyer: &str) -> Value {
    let mut record = raw_tender(id, close_at);
    record["NombreOrganismo"] = json!(buyer);
    record
}

/// Sample daily payload with two listings
#[allow(dead_code)]
pub const SAMPLE_DAY_PAYLOAD: &str = r#"{
  "Cantidad": 2,
  "Listado": [
    {
      "CodigoExterno": "1234-56-LE24",
      "Nombre": "Suministro de insumos médicos",
      "NombreOrganismo": "Servicio de Salud Araucanía Sur",
      "Estado": "Publicada",
      "FechaPublicacion": "2024-01-03T08:30:00",
      "FechaCierre": "/Date(1707777000000)/",
      "Region": "Araucanía"
    },
    {
      "Codigo": "788-2-L124",
      "NombreLicitacion": "Mantención de áreas verdes",
      "Comprador": "Municipalidad de Rancagua",
      "CodigoEstado": 5,
      "FechaCreacion": "2024-01-03T10:00:00Z",
      "FechaFinal": "2024-02-01T16:00:00"
    }
  ]
}"#;

/// Daily payload without a Listado field (a day with no published tenders)
#[allow(dead_code)]
pub const EMPTY_DAY_PAYLOAD: &str = r#"{"Cantidad": 0}"#;
