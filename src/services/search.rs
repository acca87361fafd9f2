//! List search and filtering
//!
//! Every list view narrows its in-memory collection with a free-text query
//! over a few concatenated fields, ANDed with zero or more exact-match
//! dropdown filters. Filtering is synchronous; only the global search
//! widget debounces input.

use crate::core::models::{
    Appointment, AppointmentStatus, Invoice, InvoiceStatus, MedicalRecord, Patient, PatientStatus,
    Procedure, RecordCategory,
};
use crate::storage::Directory;
use crate::utils::error::Result;
use parking_lot::Mutex;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Case-insensitive substring match over concatenated fields.
/// An empty or whitespace-only query matches everything.
pub fn text_match(fields: &[&str], query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    fields.join(" ").to_lowercase().contains(&query)
}

/// Patient list filter
#[derive(Debug, Clone, Default)]
pub struct PatientFilter {
    pub query: String,
    pub status: Option<PatientStatus>,
}

impl PatientFilter {
    pub fn matches(&self, patient: &Patient) -> bool {
        let fields = [
            patient.name.as_str(),
            patient.email.as_deref().unwrap_or(""),
            patient.phone.as_deref().unwrap_or(""),
            patient.document_number.as_deref().unwrap_or(""),
        ];
        text_match(&fields, &self.query)
            && self.status.map_or(true, |status| patient.status == status)
    }

    pub fn apply(&self, patients: &[Patient]) -> Vec<Patient> {
        patients
            .iter()
            .filter(|patient| self.matches(patient))
            .cloned()
            .collect()
    }
}

/// Appointment list filter
#[derive(Debug, Clone, Default)]
pub struct AppointmentFilter {
    pub query: String,
    pub status: Option<AppointmentStatus>,
    pub doctor_id: Option<Uuid>,
}

impl AppointmentFilter {
    pub fn matches(&self, appointment: &Appointment) -> bool {
        let fields = [
            appointment.patient_name.as_str(),
            appointment.doctor_name.as_str(),
            appointment.reason.as_str(),
        ];
        text_match(&fields, &self.query)
            && self
                .status
                .map_or(true, |status| appointment.status == status)
            && self
                .doctor_id
                .map_or(true, |doctor| appointment.doctor_id == doctor)
    }

    pub fn apply(&self, appointments: &[Appointment]) -> Vec<Appointment> {
        appointments
            .iter()
            .filter(|appointment| self.matches(appointment))
            .cloned()
            .collect()
    }
}

/// Medical record list filter
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub query: String,
    pub category: Option<RecordCategory>,
}

impl RecordFilter {
    pub fn matches(&self, record: &MedicalRecord) -> bool {
        let fields = [
            record.patient_name.as_str(),
            record.diagnosis.as_str(),
            record.notes.as_str(),
        ];
        text_match(&fields, &self.query)
            && self
                .category
                .map_or(true, |category| record.category == category)
    }

    pub fn apply(&self, records: &[MedicalRecord]) -> Vec<MedicalRecord> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}

/// Procedure catalog filter
#[derive(Debug, Clone, Default)]
pub struct ProcedureFilter {
    pub query: String,
    pub category: Option<String>,
}

impl ProcedureFilter {
    pub fn matches(&self, procedure: &Procedure) -> bool {
        let fields = [procedure.name.as_str(), procedure.code.as_str()];
        text_match(&fields, &self.query)
            && self
                .category
                .as_deref()
                .map_or(true, |category| procedure.category == category)
    }

    pub fn apply(&self, procedures: &[Procedure]) -> Vec<Procedure> {
        procedures
            .iter()
            .filter(|procedure| self.matches(procedure))
            .cloned()
            .collect()
    }
}

/// Billing list filter
#[derive(Debug, Clone, Default)]
pub struct InvoiceFilter {
    pub query: String,
    pub status: Option<InvoiceStatus>,
}

impl InvoiceFilter {
    pub fn matches(&self, invoice: &Invoice) -> bool {
        let fields = [invoice.patient_name.as_str(), invoice.description.as_str()];
        text_match(&fields, &self.query)
            && self.status.map_or(true, |status| invoice.status == status)
    }

    pub fn apply(&self, invoices: &[Invoice]) -> Vec<Invoice> {
        invoices
            .iter()
            .filter(|invoice| self.matches(invoice))
            .cloned()
            .collect()
    }
}

/// Results of one global search query, grouped by collection
#[derive(Debug, Clone, Default)]
pub struct GlobalSearchResults {
    pub patients: Vec<Patient>,
    pub appointments: Vec<Appointment>,
    pub records: Vec<MedicalRecord>,
}

impl GlobalSearchResults {
    pub fn is_empty(&self) -> bool {
        self.patients.is_empty() && self.appointments.is_empty() && self.records.is_empty()
    }
}

/// One query fanned across patients, appointments, and medical records
pub async fn global_search(
    directory: &dyn Directory,
    query: &str,
) -> Result<GlobalSearchResults> {
    if query.trim().is_empty() {
        return Ok(GlobalSearchResults::default());
    }

    let patients = PatientFilter {
        query: query.to_string(),
        ..Default::default()
    }
    .apply(&directory.list_patients().await?);

    let appointments = AppointmentFilter {
        query: query.to_string(),
        ..Default::default()
    }
    .apply(&directory.list_appointments().await?);

    let records = RecordFilter {
        query: query.to_string(),
        ..Default::default()
    }
    .apply(&directory.list_records().await?);

    Ok(GlobalSearchResults {
        patients,
        appointments,
        records,
    })
}

/// Trailing-edge debouncer for the global search input.
///
/// Each call cancels the previously scheduled action; only the last call
/// within the window runs. Per-view list filters do not debounce.
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

/// Default debounce window for the global search widget
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Schedule `action` to run after the debounce window, cancelling any
    /// previously scheduled action.
    pub fn debounce<F>(&self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        });

        if let Some(previous) = self.pending.lock().replace(handle) {
            previous.abort();
        }
    }

    /// Cancel any pending action
    pub fn cancel(&self) {
        if let Some(previous) = self.pending.lock().take() {
            previous.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Convenience: debounced global search with the results delivered to a
/// callback, the way the search widget consumes them.
pub fn debounced_global_search<D, F>(
    debouncer: &Debouncer,
    directory: Arc<D>,
    query: String,
    on_results: F,
) where
    D: Directory + 'static,
    F: FnOnce(Result<GlobalSearchResults>) + Send + 'static,
{
    debouncer.debounce(async move {
        let results = global_search(directory.as_ref(), &query).await;
        on_results(results);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{seed_demo_data, MemoryDirectory};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn patient(name: &str, email: Option<&str>, status: PatientStatus) -> Patient {
        let mut patient = Patient::new(name.to_string());
        patient.email = email.map(str::to_string);
        patient.status = status;
        patient
    }

    #[test]
    fn test_text_match_is_case_insensitive() {
        assert!(text_match(&["Joana Alves"], "joana"));
        assert!(text_match(&["Joana Alves"], "ALVES"));
        assert!(!text_match(&["Joana Alves"], "marcos"));
    }

    #[test]
    fn test_text_match_empty_query_matches_everything() {
        assert!(text_match(&["anything"], ""));
        assert!(text_match(&["anything"], "   "));
        assert!(text_match(&[], ""));
    }

    #[test]
    fn test_text_match_spans_multiple_fields() {
        assert!(text_match(&["Joana", "joana@example.test"], "example.test"));
    }

    #[test]
    fn test_patient_filter_combines_query_and_status() {
        let patients = vec![
            patient("Joana Alves", Some("joana@example.test"), PatientStatus::Active),
            patient("Joana Prado", None, PatientStatus::Inactive),
            patient("Marcos Pereira", None, PatientStatus::Active),
        ];

        let by_query = PatientFilter {
            query: "joana".to_string(),
            status: None,
        };
        assert_eq!(by_query.apply(&patients).len(), 2);

        // Free text AND dropdown.
        let combined = PatientFilter {
            query: "joana".to_string(),
            status: Some(PatientStatus::Active),
        };
        let matched = combined.apply(&patients);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Joana Alves");

        let all = PatientFilter::default();
        assert_eq!(all.apply(&patients).len(), 3);
    }

    #[tokio::test]
    async fn test_appointment_filter_by_doctor_and_status() {
        let directory = MemoryDirectory::new();
        seed_demo_data(&directory).await.unwrap();
        let appointments = directory.list_appointments().await.unwrap();
        let doctor_id = appointments[0].doctor_id;

        let filter = AppointmentFilter {
            query: String::new(),
            status: Some(AppointmentStatus::Scheduled),
            doctor_id: Some(doctor_id),
        };
        assert_eq!(filter.apply(&appointments).len(), appointments.len());

        let nobody = AppointmentFilter {
            doctor_id: Some(Uuid::new_v4()),
            ..Default::default()
        };
        assert!(nobody.apply(&appointments).is_empty());
    }

    #[tokio::test]
    async fn test_global_search_groups_results() {
        let directory = MemoryDirectory::new();
        seed_demo_data(&directory).await.unwrap();

        let results = global_search(&directory, "joana").await.unwrap();
        assert!(!results.patients.is_empty());
        assert!(!results.appointments.is_empty());
        assert!(!results.is_empty());

        let none = global_search(&directory, "zzz-no-match").await.unwrap();
        assert!(none.is_empty());

        // Empty query short-circuits instead of returning the full dataset.
        let empty = global_search(&directory, "  ").await.unwrap();
        assert!(empty.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_debouncer_runs_only_last_action() {
        let debouncer = Debouncer::new(SEARCH_DEBOUNCE);
        let runs = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let runs = runs.clone();
            debouncer.debounce(async move {
                runs.fetch_add(1, Ordering::SeqCst);
            });
        }

        tokio::time::sleep(SEARCH_DEBOUNCE * 2).await;
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounced_global_search_delivers_results() {
        let directory = Arc::new(MemoryDirectory::new());
        seed_demo_data(directory.as_ref()).await.unwrap();

        let debouncer = Debouncer::new(SEARCH_DEBOUNCE);
        let (tx, rx) = std::sync::mpsc::channel();
        debounced_global_search(&debouncer, directory, "joana".to_string(), move |results| {
            tx.send(results.unwrap().patients.len()).unwrap();
        });

        tokio::time::sleep(SEARCH_DEBOUNCE * 2).await;
        assert_eq!(rx.try_recv().unwrap(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debouncer_cancel() {
        let debouncer = Debouncer::new(SEARCH_DEBOUNCE);
        let runs = Arc::new(AtomicUsize::new(0));

        {
            let runs = runs.clone();
            debouncer.debounce(async move {
                runs.fetch_add(1, Ordering::SeqCst);
            });
        }
        debouncer.cancel();

        tokio::time::sleep(SEARCH_DEBOUNCE * 2).await;
        assert_eq!(runs.load(Ordering::SeqCst), 0);
    }
}
