//! Directory storage seam
//!
//! The clinic directory is the single backing store for staff users and the
//! list-view collections. The trait keeps callers independent of the
//! backend; the shipped implementation is in-memory.

use crate::core::models::{
    Appointment, Document, Invoice, MedicalRecord, Patient, Procedure, User, UserUpdate,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Clinic directory operations
#[async_trait]
pub trait Directory: Send + Sync {
    // Staff users
    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn list_users(&self) -> Result<Vec<User>>;
    async fn create_user(&self, user: User) -> Result<User>;
    async fn update_user(&self, id: Uuid, update: UserUpdate) -> Result<User>;
    /// Stamp the user's last login time and return the updated record
    async fn record_login(&self, id: Uuid) -> Result<User>;

    // Patients
    async fn list_patients(&self) -> Result<Vec<Patient>>;
    async fn create_patient(&self, patient: Patient) -> Result<Patient>;

    // Appointments
    async fn list_appointments(&self) -> Result<Vec<Appointment>>;
    async fn create_appointment(&self, appointment: Appointment) -> Result<Appointment>;

    // Medical records
    async fn list_records(&self) -> Result<Vec<MedicalRecord>>;
    async fn create_record(&self, record: MedicalRecord) -> Result<MedicalRecord>;

    // Procedure catalog
    async fn list_procedures(&self) -> Result<Vec<Procedure>>;
    async fn create_procedure(&self, procedure: Procedure) -> Result<Procedure>;

    // Billing
    async fn list_invoices(&self) -> Result<Vec<Invoice>>;
    async fn create_invoice(&self, invoice: Invoice) -> Result<Invoice>;

    // Documents
    async fn list_documents(&self) -> Result<Vec<Document>>;
    async fn create_document(&self, document: Document) -> Result<Document>;
}
