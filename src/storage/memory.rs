//! In-memory directory backend

use crate::core::models::{
    Appointment, Document, Invoice, MedicalRecord, Patient, Procedure, User, UserUpdate,
};
use crate::utils::error::{ClinicError, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::time::Duration;
use uuid::Uuid;

use super::directory::Directory;

/// In-memory clinic directory.
///
/// All collections live behind `RwLock`ed maps; the optional latency
/// reproduces backend round-trips in demos and is zero by default.
#[derive(Default)]
pub struct MemoryDirectory {
    latency: Duration,
    users: RwLock<HashMap<Uuid, User>>,
    patients: RwLock<HashMap<Uuid, Patient>>,
    appointments: RwLock<HashMap<Uuid, Appointment>>,
    records: RwLock<HashMap<Uuid, MedicalRecord>>,
    procedures: RwLock<HashMap<Uuid, Procedure>>,
    invoices: RwLock<HashMap<Uuid, Invoice>>,
    documents: RwLock<HashMap<Uuid, Document>>,
}

impl MemoryDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty directory with simulated latency
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            ..Default::default()
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl Directory for MemoryDirectory {
    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>> {
        self.simulate_latency().await;
        Ok(self.users.read().get(&id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.simulate_latency().await;
        let users = self.users.read();
        Ok(users
            .values()
            .find(|user| user.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.simulate_latency().await;
        Ok(self.users.read().values().cloned().collect())
    }

    async fn create_user(&self, user: User) -> Result<User> {
        self.simulate_latency().await;
        let mut users = self.users.write();
        if users
            .values()
            .any(|existing| existing.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(ClinicError::conflict(format!(
                "a user with email '{}' already exists",
                user.email
            )));
        }
        users.insert(user.id(), user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: Uuid, update: UserUpdate) -> Result<User> {
        self.simulate_latency().await;
        let mut users = self.users.write();
        let user = users
            .get_mut(&id)
            .ok_or_else(|| ClinicError::not_found(format!("user {}", id)))?;
        user.apply_update(update);
        Ok(user.clone())
    }

    async fn record_login(&self, id: Uuid) -> Result<User> {
        self.simulate_latency().await;
        let mut users = self.users.write();
        let user = users
            .get_mut(&id)
            .ok_or_else(|| ClinicError::not_found(format!("user {}", id)))?;
        user.update_last_login();
        Ok(user.clone())
    }

    async fn list_patients(&self) -> Result<Vec<Patient>> {
        self.simulate_latency().await;
        Ok(self.patients.read().values().cloned().collect())
    }

    async fn create_patient(&self, patient: Patient) -> Result<Patient> {
        self.simulate_latency().await;
        self.patients.write().insert(patient.id(), patient.clone());
        Ok(patient)
    }

    async fn list_appointments(&self) -> Result<Vec<Appointment>> {
        self.simulate_latency().await;
        Ok(self.appointments.read().values().cloned().collect())
    }

    async fn create_appointment(&self, appointment: Appointment) -> Result<Appointment> {
        self.simulate_latency().await;
        self.appointments
            .write()
            .insert(appointment.id(), appointment.clone());
        Ok(appointment)
    }

    async fn list_records(&self) -> Result<Vec<MedicalRecord>> {
        self.simulate_latency().await;
        Ok(self.records.read().values().cloned().collect())
    }

    async fn create_record(&self, record: MedicalRecord) -> Result<MedicalRecord> {
        self.simulate_latency().await;
        self.records.write().insert(record.id(), record.clone());
        Ok(record)
    }

    async fn list_procedures(&self) -> Result<Vec<Procedure>> {
        self.simulate_latency().await;
        Ok(self.procedures.read().values().cloned().collect())
    }

    async fn create_procedure(&self, procedure: Procedure) -> Result<Procedure> {
        self.simulate_latency().await;
        self.procedures
            .write()
            .insert(procedure.id(), procedure.clone());
        Ok(procedure)
    }

    async fn list_invoices(&self) -> Result<Vec<Invoice>> {
        self.simulate_latency().await;
        Ok(self.invoices.read().values().cloned().collect())
    }

    async fn create_invoice(&self, invoice: Invoice) -> Result<Invoice> {
        self.simulate_latency().await;
        self.invoices.write().insert(invoice.id(), invoice.clone());
        Ok(invoice)
    }

    async fn list_documents(&self) -> Result<Vec<Document>> {
        self.simulate_latency().await;
        Ok(self.documents.read().values().cloned().collect())
    }

    async fn create_document(&self, document: Document) -> Result<Document> {
        self.simulate_latency().await;
        self.documents
            .write()
            .insert(document.id(), document.clone());
        Ok(document)
    }
}
