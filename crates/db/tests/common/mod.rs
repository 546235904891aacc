#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;
use voluntech_db::models::availability::{Availability, CreateAvailability};
use voluntech_db::models::school::{CreateSchool, School};
use voluntech_db::models::user::{CreateUser, NewProfile};
use voluntech_db::models::volunteer::{CreateVolunteer, Volunteer};
use voluntech_db::repositories::{AvailabilityRepo, RoleRepo, UserRepo};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

async fn create_user(pool: &PgPool, email: &str, role: &str, profile: NewProfile) -> voluntech_db::models::user::RegisteredUser {
    let role = RoleRepo::find_by_name(pool, role).await.unwrap().unwrap();
    let input = CreateUser {
        name: email.split('@').next().unwrap().to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
        role_id: role.id,
    };
    UserRepo::create_with_profile(pool, &input, &profile)
        .await
        .expect("registration should succeed")
}

pub async fn seed_school(pool: &PgPool, email: &str) -> School {
    let profile = NewProfile::School(CreateSchool {
        school_name: format!("School of {email}"),
        contact_person: "Directora".to_string(),
        phone: "555-0100".to_string(),
    });
    create_user(pool, email, "school", profile).await.school.unwrap()
}

pub async fn seed_volunteer(pool: &PgPool, email: &str, specialties: &[&str], modality: &str) -> Volunteer {
    let profile = NewProfile::Volunteer(CreateVolunteer {
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
        modality: modality.to_string(),
    });
    create_user(pool, email, "volunteer", profile).await.volunteer.unwrap()
}

pub async fn seed_slot(pool: &PgPool, volunteer_id: i64, day: NaiveDate, start_hour: u32) -> Availability {
    AvailabilityRepo::create(
        pool,
        &CreateAvailability {
            volunteer_id,
            date: day,
            start_time: time(start_hour, 0),
            end_time: time(start_hour + 1, 0),
        },
    )
    .await
    .unwrap()
}
