use super::*;
use serde_json::json;

// =============================================================
// Scalar coercions
// =============================================================

#[test]
fn json_id_accepts_numbers_and_strings() {
    assert_eq!(json_id(&json!(7)), Some("7".to_owned()));
    assert_eq!(json_id(&json!("u-7")), Some("u-7".to_owned()));
    assert_eq!(json_id(&json!("")), None);
    assert_eq!(json_id(&json!(null)), None);
    assert_eq!(json_id(&json!({ "id": 1 })), None);
}

#[test]
fn json_flag_matches_backend_truthiness() {
    assert!(json_flag(&json!(true)));
    assert!(json_flag(&json!(1)));
    assert!(json_flag(&json!("1")));
    assert!(!json_flag(&json!(false)));
    assert!(!json_flag(&json!(0)));
    assert!(!json_flag(&json!("true")));
    assert!(!json_flag(&json!(null)));
}

#[test]
fn estado_defaults_to_pendiente_for_unknown_values() {
    let estado: Estado = serde_json::from_value(json!("archivado")).unwrap();
    assert_eq!(estado, Estado::Pendiente);
    let estado: Estado = serde_json::from_value(json!(null)).unwrap();
    assert_eq!(estado, Estado::Pendiente);
    let estado: Estado = serde_json::from_value(json!("rechazado")).unwrap();
    assert_eq!(estado, Estado::Rechazado);
}

// =============================================================
// Records
// =============================================================

#[test]
fn expediente_decodes_loose_row() {
    let exp: Expediente = serde_json::from_value(json!({
        "id": 12,
        "codigo": "EXP-001",
        "descripcion": "Robo",
        "tecnico_id": 3,
        "estado": "aprobado",
        "aprobador": { "nombre": "Marta" },
        "activo": 1
    }))
    .unwrap();
    assert_eq!(exp.id, "12");
    assert_eq!(exp.tecnico_id, "3");
    assert_eq!(exp.estado, Estado::Aprobado);
    assert_eq!(exp.aprobador_nombre.as_deref(), Some("Marta"));
    assert!(exp.activo);
    assert_eq!(exp.fecha_registro, None);
}

#[test]
fn expediente_approver_name_prefers_flat_fields() {
    let exp: Expediente = serde_json::from_value(json!({
        "codigo": "EXP-002",
        "aprobador_username": "mvasquez",
        "aprobador": { "nombre": "Otro" }
    }))
    .unwrap();
    assert_eq!(exp.aprobador_nombre.as_deref(), Some("mvasquez"));
    assert!(!exp.activo);
    assert_eq!(exp.estado, Estado::Pendiente);
}

#[test]
fn indicio_parses_string_weight() {
    let ind: Indicio = serde_json::from_value(json!({
        "codigo": "IND-1",
        "expediente_codigo": "EXP-001",
        "peso": "2.5",
        "activo": "1"
    }))
    .unwrap();
    assert_eq!(ind.peso, Some(2.5));
    assert!(ind.activo);
    assert_eq!(ind.id, None);
}

#[test]
fn usuario_keeps_raw_role_tag() {
    let user: Usuario = serde_json::from_value(json!({
        "id": 5, "nombre": "Ana", "email": "a@b.com", "rol": "usuario", "activo": true
    }))
    .unwrap();
    assert_eq!(user.id, "5");
    assert_eq!(user.rol, "usuario");
}

// =============================================================
// List envelopes
// =============================================================

#[test]
fn list_page_reads_data_envelope_with_total() {
    let page: ListPage<Usuario> = parse_list_page(&json!({
        "data": [{ "id": 1, "nombre": "Ana" }, { "id": 2, "nombre": "Luis" }],
        "total": 37
    }));
    assert_eq!(page.rows.len(), 2);
    assert_eq!(page.total, 37);
}

#[test]
fn list_page_reads_items_envelope_with_total_count() {
    let page: ListPage<Indicio> = parse_list_page(&json!({
        "items": [{ "codigo": "IND-1" }],
        "totalCount": "4"
    }));
    assert_eq!(page.rows.len(), 1);
    assert_eq!(page.total, 4);
}

#[test]
fn list_page_reads_bare_array_and_counts_rows() {
    let page: ListPage<Usuario> = parse_list_page(&json!([{ "id": 1 }, { "id": 2 }, { "id": 3 }]));
    assert_eq!(page.rows.len(), 3);
    assert_eq!(page.total, 3);
}

#[test]
fn list_page_skips_rows_that_are_not_objects() {
    let page: ListPage<Usuario> = parse_list_page(&json!({ "data": [{ "id": 1 }, "junk", 4] }));
    assert_eq!(page.rows.len(), 1);
}

#[test]
fn list_page_is_empty_for_unknown_shapes() {
    let page: ListPage<Usuario> = parse_list_page(&json!({ "raw": "<html>" }));
    assert_eq!(page, ListPage::default());
    let page: ListPage<Usuario> = parse_list_page(&json!("nope"));
    assert_eq!(page, ListPage::default());
}

#[test]
fn single_record_accepts_object_data_or_array() {
    let direct: Option<Expediente> = parse_single(&json!({ "codigo": "A" }));
    let wrapped: Option<Expediente> = parse_single(&json!({ "data": { "codigo": "B" } }));
    let listed: Option<Expediente> = parse_single(&json!([{ "codigo": "C" }]));
    assert_eq!(direct.map(|e| e.codigo).as_deref(), Some("A"));
    assert_eq!(wrapped.map(|e| e.codigo).as_deref(), Some("B"));
    assert_eq!(listed.map(|e| e.codigo).as_deref(), Some("C"));
    assert!(parse_single::<Expediente>(&json!([])).is_none());
}
