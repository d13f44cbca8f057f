use chrono::NaiveDate;
use fleetdeck_core::db::open_db_in_memory;
use fleetdeck_core::service::dashboard_service::{count_overdue, jobs_per_ship, recent_jobs};
use fleetdeck_core::{
    Component, ComponentRepository, DashboardService, Job, JobRepository, KvComponentRepository,
    KvJobRepository, KvShipRepository, Ship, ShipRepository,
};
use rusqlite::Connection;
use uuid::Uuid;

fn setup() -> Connection {
    open_db_in_memory().unwrap()
}

fn service(conn: &Connection) -> DashboardService<KvShipRepository<'_>, KvComponentRepository<'_>, KvJobRepository<'_>> {
    DashboardService::new(
        KvShipRepository::new(conn),
        KvComponentRepository::new(conn),
        KvJobRepository::new(conn),
    )
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn component_serviced_on(last_maintenance: Option<NaiveDate>) -> Component {
    let mut component = Component::new(Uuid::new_v4(), "Main Engine");
    component.last_maintenance_date = last_maintenance;
    component
}

fn job_with_status(ship_id: Uuid, status: &str) -> Job {
    let mut job = Job::new(ship_id);
    job.status = status.to_string();
    job
}

fn job_scheduled_on(ship_id: Uuid, scheduled: Option<NaiveDate>) -> Job {
    let mut job = Job::new(ship_id);
    job.scheduled_date = scheduled;
    job
}

#[test]
fn empty_collections_aggregate_to_zero_stats() {
    let conn = setup();

    let snapshot = service(&conn).load_snapshot(date(2024, 6, 15)).unwrap();

    assert_eq!(snapshot.stats.total_ships, 0);
    assert_eq!(snapshot.stats.overdue_components, 0);
    assert_eq!(snapshot.stats.jobs_in_progress, 0);
    assert_eq!(snapshot.stats.completed_jobs, 0);
    assert!(snapshot.recent_jobs.is_empty());
    assert!(snapshot.jobs_per_ship.is_empty());
}

#[test]
fn overdue_boundary_is_exclusive_of_the_rolled_back_date() {
    let today = date(2024, 6, 15);
    // Three months before 2024-06-15 is 2024-03-15.
    let components = vec![
        component_serviced_on(Some(date(2024, 3, 14))), // one day past: overdue
        component_serviced_on(Some(date(2024, 3, 15))), // exactly on cutoff: not
        component_serviced_on(Some(date(2024, 3, 16))), // inside window: not
    ];

    assert_eq!(count_overdue(&components, today), 1);
}

#[test]
fn overdue_cutoff_clamps_to_last_valid_day_of_rolled_back_month() {
    // 2024-05-31 minus 3 months anchors to 2024-02-29 (leap year).
    let today = date(2024, 5, 31);
    let components = vec![
        component_serviced_on(Some(date(2024, 2, 28))), // before clamped cutoff: overdue
        component_serviced_on(Some(date(2024, 2, 29))), // on clamped cutoff: not
    ];
    assert_eq!(count_overdue(&components, today), 1);

    // 2023-05-31 minus 3 months anchors to 2023-02-28 (non-leap).
    let today = date(2023, 5, 31);
    let components = vec![
        component_serviced_on(Some(date(2023, 2, 27))),
        component_serviced_on(Some(date(2023, 2, 28))),
    ];
    assert_eq!(count_overdue(&components, today), 1);
}

#[test]
fn component_without_maintenance_date_is_never_overdue() {
    let components = vec![component_serviced_on(None)];
    assert_eq!(count_overdue(&components, date(2024, 6, 15)), 0);
}

#[test]
fn status_buckets_use_exact_string_equality() {
    let conn = setup();
    let ship = Ship::new("MV Aurora");
    let ship_id = ship.id;
    KvShipRepository::new(&conn).save_all(&[ship]).unwrap();
    KvJobRepository::new(&conn)
        .save_all(&[
            job_with_status(ship_id, "In Progress"),
            job_with_status(ship_id, "In Progress"),
            job_with_status(ship_id, "Completed"),
            job_with_status(ship_id, "in progress"), // wrong case: neither bucket
            job_with_status(ship_id, "Open"),
            job_with_status(ship_id, ""),
        ])
        .unwrap();

    let stats = service(&conn).load_snapshot(date(2024, 6, 15)).unwrap().stats;

    assert_eq!(stats.jobs_in_progress, 2);
    assert_eq!(stats.completed_jobs, 1);
    // Untracked statuses land in neither bucket.
    assert!(stats.jobs_in_progress + stats.completed_jobs <= 6);
}

#[test]
fn recent_jobs_returns_at_most_five_latest_descending() {
    let ship_id = Uuid::new_v4();
    let jobs: Vec<Job> = (1..=7)
        .map(|day| job_scheduled_on(ship_id, Some(date(2024, 6, day))))
        .collect();

    let recent = recent_jobs(&jobs);

    assert_eq!(recent.len(), 5);
    let dates: Vec<NaiveDate> = recent
        .iter()
        .map(|job| job.scheduled_date.unwrap())
        .collect();
    assert_eq!(
        dates,
        vec![
            date(2024, 6, 7),
            date(2024, 6, 6),
            date(2024, 6, 5),
            date(2024, 6, 4),
            date(2024, 6, 3),
        ]
    );
}

#[test]
fn recent_jobs_breaks_date_ties_by_collection_order() {
    let ship_id = Uuid::new_v4();
    let first = job_scheduled_on(ship_id, Some(date(2024, 6, 1)));
    let second = job_scheduled_on(ship_id, Some(date(2024, 6, 1)));
    let third = job_scheduled_on(ship_id, Some(date(2024, 6, 1)));
    let jobs = vec![first.clone(), second.clone(), third.clone()];

    let recent = recent_jobs(&jobs);

    let ids: Vec<Uuid> = recent.iter().map(|job| job.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);
}

#[test]
fn recent_jobs_sorts_dateless_jobs_last() {
    let ship_id = Uuid::new_v4();
    let dateless = job_scheduled_on(ship_id, None);
    let dated = job_scheduled_on(ship_id, Some(date(2024, 1, 1)));
    let jobs = vec![dateless.clone(), dated.clone()];

    let recent = recent_jobs(&jobs);

    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].id, dated.id);
    assert_eq!(recent[1].id, dateless.id);
}

#[test]
fn recent_jobs_is_idempotent_over_the_same_input() {
    let ship_id = Uuid::new_v4();
    let jobs = vec![
        job_scheduled_on(ship_id, Some(date(2024, 3, 10))),
        job_scheduled_on(ship_id, None),
        job_scheduled_on(ship_id, Some(date(2024, 5, 2))),
        job_scheduled_on(ship_id, Some(date(2024, 5, 2))),
    ];

    assert_eq!(recent_jobs(&jobs), recent_jobs(&jobs));
}

#[test]
fn jobs_per_ship_keeps_fleet_order_and_zero_counts() {
    let aurora = Ship::new("MV Aurora");
    let meridian = Ship::new("SS Meridian");
    let jobs = vec![
        Job::new(aurora.id),
        Job::new(aurora.id),
        Job::new(Uuid::new_v4()), // unknown ship: skipped
    ];

    let counts = jobs_per_ship(&[aurora.clone(), meridian.clone()], &jobs);

    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].ship_id, aurora.id);
    assert_eq!(counts[0].job_count, 2);
    assert_eq!(counts[1].ship_id, meridian.id);
    assert_eq!(counts[1].job_count, 0);
}

#[test]
fn snapshot_counts_total_ships_from_fleet_collection() {
    let conn = setup();
    KvShipRepository::new(&conn)
        .save_all(&[Ship::new("A"), Ship::new("B"), Ship::new("C")])
        .unwrap();
    KvComponentRepository::new(&conn)
        .save_all(&[component_serviced_on(Some(date(2024, 1, 1)))])
        .unwrap();

    let snapshot = service(&conn).load_snapshot(date(2024, 6, 15)).unwrap();

    assert_eq!(snapshot.stats.total_ships, 3);
    assert_eq!(snapshot.stats.overdue_components, 1);
}
