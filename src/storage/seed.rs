//! Demo dataset for the in-memory directory

use crate::core::models::{
    Appointment, AppointmentStatus, Invoice, InvoiceStatus, MedicalRecord, Patient, Procedure,
    RecordCategory, User, UserRole,
};
use crate::storage::directory::Directory;
use crate::storage::memory::MemoryDirectory;
use crate::utils::crypto::hash_password;
use crate::utils::error::{ClinicError, Result};
use chrono::{Duration, NaiveDate, Utc};
use tracing::info;

/// Password shared by every seeded demo account
pub const DEMO_PASSWORD: &str = "clinikit-demo";

/// Seed the directory with a deterministic demo dataset: one staff account
/// per role, a handful of patients, and enough appointments, records,
/// procedures, and invoices to exercise every list view.
pub async fn seed_demo_data(directory: &MemoryDirectory) -> Result<()> {
    info!("Seeding demo dataset");

    let password_hash = hash_password(DEMO_PASSWORD)?;

    let staff = [
        ("Clara Mendes", "admin@clinic.test", UserRole::Administrator, None),
        ("Rafael Lima", "rafael@clinic.test", UserRole::Doctor, Some("Cardiology")),
        ("Beatriz Rocha", "beatriz@clinic.test", UserRole::Nurse, None),
        ("Paulo Dias", "frontdesk@clinic.test", UserRole::Receptionist, None),
        ("Iris Campos", "viewer@clinic.test", UserRole::Viewer, None),
    ];

    let mut doctor_id = None;
    for (name, email, role, specialty) in staff {
        let mut user = User::new(
            name.to_string(),
            email.to_string(),
            password_hash.clone(),
            role,
        );
        user.specialty = specialty.map(str::to_string);
        let created = directory.create_user(user).await?;
        if role == UserRole::Doctor {
            doctor_id = Some((created.id(), created.name.clone()));
        }
    }
    let (doctor_id, doctor_name) =
        doctor_id.ok_or_else(|| ClinicError::internal("demo dataset has no doctor account"))?;

    let patient_names = [
        ("Joana Alves", Some("joana@example.test"), Some("VitaCare")),
        ("Marcos Pereira", None, None),
        ("Helena Costa", Some("helena@example.test"), Some("MedPlus")),
    ];
    let mut patient_ids = Vec::new();
    for (name, email, insurance) in patient_names {
        let mut patient = Patient::new(name.to_string());
        patient.email = email.map(str::to_string);
        patient.insurance = insurance.map(str::to_string);
        patient.birth_date = NaiveDate::from_ymd_opt(1985, 6, 15);
        let created = directory.create_patient(patient).await?;
        patient_ids.push((created.id(), created.name.clone()));
    }

    let now = Utc::now();
    for (offset, (patient_id, patient_name)) in patient_ids.iter().enumerate() {
        directory
            .create_appointment(Appointment {
                metadata: Default::default(),
                patient_id: *patient_id,
                patient_name: patient_name.clone(),
                doctor_id,
                doctor_name: doctor_name.clone(),
                scheduled_at: now + Duration::days(offset as i64 + 1),
                reason: "Routine checkup".to_string(),
                status: AppointmentStatus::Scheduled,
            })
            .await?;
    }

    let (first_patient, first_name) = patient_ids[0].clone();
    directory
        .create_record(MedicalRecord {
            metadata: Default::default(),
            patient_id: first_patient,
            patient_name: first_name.clone(),
            doctor_id,
            diagnosis: "Mild hypertension".to_string(),
            notes: "Recommended dietary changes and follow-up in 3 months".to_string(),
            category: RecordCategory::Consultation,
        })
        .await?;

    for (name, code, category, price_cents) in [
        ("General consultation", "C-100", "consultation", 15_000),
        ("Blood panel", "L-210", "laboratory", 9_500),
        ("Electrocardiogram", "D-310", "diagnostics", 22_000),
    ] {
        directory
            .create_procedure(Procedure {
                metadata: Default::default(),
                name: name.to_string(),
                code: code.to_string(),
                category: category.to_string(),
                price_cents,
            })
            .await?;
    }

    directory
        .create_invoice(Invoice {
            metadata: Default::default(),
            patient_id: first_patient,
            patient_name: first_name,
            description: "General consultation".to_string(),
            amount_cents: 15_000,
            due_date: (now + Duration::days(30)).date_naive(),
            status: InvoiceStatus::Pending,
        })
        .await?;

    info!("Demo dataset seeded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_covers_every_role_and_view() {
        let directory = MemoryDirectory::new();
        seed_demo_data(&directory).await.unwrap();

        let users = directory.list_users().await.unwrap();
        for role in UserRole::ALL {
            assert!(
                users.iter().any(|user| user.role == role),
                "no seeded user for role {}",
                role
            );
        }

        assert!(!directory.list_patients().await.unwrap().is_empty());
        let appointments = directory.list_appointments().await.unwrap();
        assert!(!appointments.is_empty());
        assert!(appointments.iter().all(|appointment| appointment.is_open()));
        assert!(!directory.list_records().await.unwrap().is_empty());
        assert!(!directory.list_procedures().await.unwrap().is_empty());
        assert!(!directory.list_invoices().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_seeded_accounts_share_demo_password() {
        let directory = MemoryDirectory::new();
        seed_demo_data(&directory).await.unwrap();

        let admin = directory
            .find_user_by_email("admin@clinic.test")
            .await
            .unwrap()
            .unwrap();
        assert!(crate::utils::crypto::verify_password(DEMO_PASSWORD, &admin.password_hash).unwrap());
    }
}
