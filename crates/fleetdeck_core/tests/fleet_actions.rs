use chrono::NaiveDate;
use fleetdeck_core::db::open_db_in_memory;
use fleetdeck_core::{
    ComponentRepository, FleetService, FleetServiceError, Job, JobRepository,
    KvComponentRepository, KvJobRepository, KvShipRepository, NewJob, NewShip,
};
use rusqlite::Connection;
use uuid::Uuid;

fn setup() -> Connection {
    open_db_in_memory().unwrap()
}

fn service(
    conn: &Connection,
) -> FleetService<KvShipRepository<'_>, KvComponentRepository<'_>, KvJobRepository<'_>> {
    FleetService::new(
        KvShipRepository::new(conn),
        KvComponentRepository::new(conn),
        KvJobRepository::new(conn),
    )
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

#[test]
fn add_ship_appends_without_disturbing_existing_records() {
    let conn = setup();
    let fleet = service(&conn);

    let first = fleet
        .add_ship(NewShip {
            name: "MV Aurora".to_string(),
            ..NewShip::default()
        })
        .unwrap();
    let second = fleet
        .add_ship(NewShip {
            name: "SS Meridian".to_string(),
            imo: Some("9176187".to_string()),
            ..NewShip::default()
        })
        .unwrap();

    let ships = fleet.ships().unwrap();
    assert_eq!(ships.len(), 2);
    assert_eq!(ships[0].id, first);
    assert_eq!(ships[0].name, "MV Aurora");
    assert_eq!(ships[1].id, second);
    assert_eq!(ships[1].imo.as_deref(), Some("9176187"));
}

#[test]
fn add_ship_trims_name_and_rejects_blank() {
    let conn = setup();
    let fleet = service(&conn);

    let id = fleet
        .add_ship(NewShip {
            name: "  MV Aurora  ".to_string(),
            ..NewShip::default()
        })
        .unwrap();
    let ships = fleet.ships().unwrap();
    assert_eq!(ships[0].id, id);
    assert_eq!(ships[0].name, "MV Aurora");

    let err = fleet
        .add_ship(NewShip {
            name: "   ".to_string(),
            ..NewShip::default()
        })
        .unwrap_err();
    assert!(matches!(err, FleetServiceError::InvalidDisplayName));
}

#[test]
fn add_job_requires_an_existing_ship() {
    let conn = setup();
    let fleet = service(&conn);
    let ghost = Uuid::new_v4();

    let err = fleet
        .add_job(NewJob {
            ship_id: ghost,
            component_id: None,
            job_type: None,
            priority: None,
            status: None,
            scheduled_date: None,
        })
        .unwrap_err();

    assert!(matches!(err, FleetServiceError::UnknownShip(id) if id == ghost));
    assert!(fleet.jobs().unwrap().is_empty());
}

#[test]
fn add_job_defaults_status_to_open_and_stores_free_strings_verbatim() {
    let conn = setup();
    let fleet = service(&conn);
    let ship_id = fleet
        .add_ship(NewShip {
            name: "MV Aurora".to_string(),
            ..NewShip::default()
        })
        .unwrap();

    fleet
        .add_job(NewJob {
            ship_id,
            component_id: None,
            job_type: Some("Inspection".to_string()),
            priority: None,
            status: None,
            scheduled_date: Some(today()),
        })
        .unwrap();
    fleet
        .add_job(NewJob {
            ship_id,
            component_id: None,
            job_type: None,
            priority: None,
            status: Some("Awaiting Parts".to_string()),
            scheduled_date: None,
        })
        .unwrap();

    let jobs = fleet.jobs().unwrap();
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].status, "Open");
    assert_eq!(jobs[0].scheduled_date, Some(today()));
    // Open status set: arbitrary strings are stored untouched.
    assert_eq!(jobs[1].status, "Awaiting Parts");
}

#[test]
fn seed_installs_demo_fleet_only_into_an_empty_store() {
    let conn = setup();
    let fleet = service(&conn);

    assert!(fleet.seed_demo_data(today()).unwrap());

    let ships = fleet.ships().unwrap();
    let components = KvComponentRepository::new(&conn).load_all().unwrap();
    let jobs = fleet.jobs().unwrap();
    assert_eq!(ships.len(), 2);
    assert_eq!(components.len(), 2);
    assert_eq!(jobs.len(), 3);

    // One seeded component sits past the three-month cutoff.
    assert_eq!(
        components
            .iter()
            .filter(|component| component.is_overdue(today()))
            .count(),
        1
    );

    // Second seed is a no-op.
    assert!(!fleet.seed_demo_data(today()).unwrap());
    assert_eq!(fleet.ships().unwrap(), ships);
    assert_eq!(fleet.jobs().unwrap(), jobs);
}

#[test]
fn seed_is_skipped_when_any_collection_holds_records() {
    let conn = setup();
    let fleet = service(&conn);

    // Jobs present while ships are empty: seeding would overwrite them.
    let orphan = Job::new(Uuid::new_v4());
    KvJobRepository::new(&conn).save_all(&[orphan.clone()]).unwrap();

    assert!(!fleet.seed_demo_data(today()).unwrap());
    assert!(fleet.ships().unwrap().is_empty());
    assert_eq!(fleet.jobs().unwrap(), vec![orphan]);
}
