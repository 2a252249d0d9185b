//! Integration tests for classification and aggregation.
//!
//! These verify the derived semantics end to end: entity kinds from type
//! codes, normalized health codes, active-server detection, and the folded
//! proxy -> member -> status map.

use hastatus::{
    classify_table, parse_stat_table, statuses, EntityKind, Error, HealthCode, StatusEntity,
};

fn classify(blob: &str) -> Vec<StatusEntity> {
    classify_table(&parse_stat_table(blob).unwrap()).unwrap()
}

const SNAPSHOT: &str = "\
# pxname,svname,qcur,scur,status,act,bck,type,\n\
www,FRONTEND,,3,OPEN,,,0,\n\
www,BACKEND,0,3,UP,2,0,1,\n\
redis_cache_19201,cache10,0,1,UP,1,0,2,\n\
redis_cache_19201,cache11,0,0,MAINT,0,0,2,\n\
redis_cache_19201,cache12,0,0,DOWN (going up),1,0,2,\n\
redis_cache_19201,BACKEND,0,1,UP,2,0,1,\n";

#[test]
fn test_fields_round_trip_verbatim() {
    let table = parse_stat_table(SNAPSHOT).unwrap();
    let entities = classify_table(&table).unwrap();

    assert_eq!(entities.len(), table.len());
    for (entity, row) in entities.iter().zip(table.rows()) {
        assert_eq!(Some(entity.proxy.as_str()), row.get("pxname"));
        assert_eq!(Some(entity.name.as_str()), row.get("svname"));
        assert_eq!(Some(entity.status.as_str()), row.get("status"));
        assert_eq!(Some(entity.active.as_str()), row.get("act"));
    }
}

#[test]
fn test_kinds_and_activity() {
    let entities = classify(SNAPSHOT);

    assert_eq!(entities[0].kind, EntityKind::Frontend);
    assert_eq!(entities[1].kind, EntityKind::Backend);
    assert_eq!(entities[2].kind, EntityKind::Server);

    // Only servers with act == "1" are active; aggregate rows never are,
    // even with a populated act field.
    let active: Vec<&str> = entities
        .iter()
        .filter(|e| e.is_active())
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(active, vec!["cache10", "cache12"]);

    for e in entities.iter().filter(|e| !e.is_server()) {
        assert!(!e.is_active(), "{}/{} must not be active", e.proxy, e.name);
    }
}

#[test]
fn test_health_codes_across_snapshot() {
    let entities = classify(SNAPSHOT);
    let health: Vec<i8> = entities.iter().map(|e| e.health().code()).collect();
    // OPEN is outside the documented scheme and lands on the unknown
    // sentinel, as does MAINT.
    assert_eq!(health, vec![-1, 1, 1, -1, 4, 1]);
}

#[test]
fn test_health_code_is_total_over_arbitrary_strings() {
    let statuses = [
        "UP", "UP 1/3", "UP (going down)", "DOWN", "DOWN 1/2", "DOWN (going up)", "no check",
        "MAINT", "MAINT (via x)", "DRAIN", "OPEN", "FULL", "STOP", "", " ", "up", "down",
        "no check ", "\u{1F980}",
    ];
    for s in statuses {
        let code = HealthCode::from_status(s).code();
        assert!(
            (-1..=4).contains(&code),
            "status {s:?} produced out-of-range code {code}"
        );
    }
    // Exact literals win over their own prefixes.
    assert_eq!(HealthCode::from_status("UP").code(), 1);
    assert_eq!(HealthCode::from_status("UP (going down)").code(), 2);
    assert_eq!(HealthCode::from_status("DOWN").code(), 3);
    assert_eq!(HealthCode::from_status("DOWN (going up)").code(), 4);
    assert_eq!(HealthCode::from_status("no check").code(), 0);
}

#[test]
fn test_status_map_contents() {
    let entities = classify(SNAPSHOT);
    let map = statuses(&entities);

    assert_eq!(map.len(), 2);
    assert_eq!(map["redis_cache_19201"]["cache10"], "UP");
    assert_eq!(map["redis_cache_19201"]["cache11"], "MAINT");
    assert_eq!(map["redis_cache_19201"]["cache12"], "DOWN (going up)");
    assert_eq!(map["redis_cache_19201"]["BACKEND"], "UP");
    assert_eq!(map["www"]["FRONTEND"], "OPEN");
    assert_eq!(map["www"]["BACKEND"], "UP");
}

#[test]
fn test_aggregation_ignores_entity_order() {
    let mut entities = classify(SNAPSHOT);
    let forward = statuses(&entities);
    entities.reverse();
    assert_eq!(statuses(&entities), forward);
}

#[test]
fn test_duplicate_pair_keeps_later_status() {
    let entities = classify(
        "# pxname,svname,status,act,type,\n\
         web,srv1,UP,1,2,\n\
         web,srv1,DOWN,0,2,\n",
    );
    let map = statuses(&entities);
    assert_eq!(map["web"]["srv1"], "DOWN");
}

#[test]
fn test_unknown_type_code_fails_with_row_identity() {
    let table =
        parse_stat_table("# pxname,svname,status,act,type,\nweb,srv1,UP,1,7,\n").unwrap();
    match classify_table(&table).unwrap_err() {
        Error::Classification {
            proxy,
            name,
            type_code,
        } => {
            assert_eq!((proxy.as_str(), name.as_str()), ("web", "srv1"));
            assert_eq!(type_code, "7");
        }
        other => panic!("expected classification error, got {other:?}"),
    }
}

#[test]
fn test_name_fallback_without_type_column() {
    let entities = classify_table(
        &parse_stat_table(
            "# pxname,svname,status,act,\n\
             web,srv1,UP,1,\n\
             web,BACKEND,UP,1,\n",
        )
        .unwrap(),
    )
    .unwrap();

    assert_eq!(entities[0].kind, EntityKind::Server);
    assert!(entities[0].is_active());
    assert_eq!(entities[1].kind, EntityKind::Backend);
    assert!(!entities[1].is_active());
}
