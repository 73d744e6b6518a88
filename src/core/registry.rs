//! # Service Registry
//!
//! 시작 시 한 번 모든 리포지토리, 가드, 서비스를 조립합니다.
//! 리포지토리는 엔티티 타입마다 하나만 만들어 서비스와 가드가 같은 `Arc`를 공유합니다.
//!
//! ## 참조 관계
//!
//! ```text
//! 저장 시 존재 확인 (ReferenceGuard)          삭제 시 사용 중 확인 (InUseGuard)
//! Manufacturer/Vendor → Country             Country      ← Manufacturer, Vendor, Provider, Lab
//! Provider/Lab → Country
//! Device   → Manufacturer, Vendor, Country  Manufacturer ← Device, TestCase
//! TestCase → Manufacturer, Vendor           Vendor       ← Device, TestCase
//! ConnectedTest → Device                    Device       ← ConnectedTest
//! NotificationEvent → Email/SMS 템플릿       Email/SMS 템플릿 ← NotificationEvent
//! Notification → NotificationEvent          NotificationEvent ← Notification
//! ```

use std::sync::Arc;

use crate::core::errors::AppResult;
use crate::domain::entities::*;
use crate::repositories::RepositoryProvider;
use crate::services::audit::AuditService;
use crate::services::auth::TokenService;
use crate::services::communications::{MessageSender, NotificationService};
use crate::services::crud::CrudService;
use crate::services::guards::{InUseGuard, ReferenceGuard};
use crate::utils::display_terminal::{
    print_boxed_title, print_final_summary, print_step_complete, print_step_start, print_sub_task,
};

/// 전체 서비스 묶음
///
/// 모든 필드가 `Arc`라서 actix 워커마다 복제해도 비용이 거의 없습니다.
#[derive(Clone)]
pub struct ServiceRegistry {
    /// 저장소 설명 (`MongoDB (opencdx)`, `in-memory`)
    pub storage: String,
    pub tokens: Arc<TokenService>,
    pub audit: Arc<AuditService>,

    // health
    pub allergies: Arc<CrudService<Allergy>>,
    pub medications: Arc<CrudService<Medication>>,
    pub vaccines: Arc<CrudService<Vaccine>>,

    // clinical
    pub doctor_notes: Arc<CrudService<DoctorNote>>,
    pub medical_records: Arc<CrudService<MedicalRecord>>,
    pub medical_histories: Arc<CrudService<MedicalHistory>>,
    pub routines: Arc<CrudService<Routine>>,
    pub providers: Arc<CrudService<Provider>>,
    pub labs: Arc<CrudService<Lab>>,

    // vitals
    pub bpm: Arc<CrudService<Bpm>>,
    pub heart_rpm: Arc<CrudService<HeartRpm>>,
    pub heights: Arc<CrudService<HeightMeasurement>>,
    pub weights: Arc<CrudService<WeightMeasurement>>,
    pub temperatures: Arc<CrudService<TemperatureMeasurement>>,

    // connected
    pub connected_tests: Arc<CrudService<ConnectedTest>>,

    // logistics
    pub countries: Arc<CrudService<Country>>,
    pub manufacturers: Arc<CrudService<Manufacturer>>,
    pub vendors: Arc<CrudService<Vendor>>,
    pub devices: Arc<CrudService<Device>>,
    pub test_cases: Arc<CrudService<TestCase>>,

    // communications
    pub email_templates: Arc<CrudService<EmailTemplate>>,
    pub sms_templates: Arc<CrudService<SmsTemplate>>,
    pub notification_events: Arc<CrudService<NotificationEvent>>,
    pub notifications: Arc<CrudService<Notification>>,
    pub notification_service: Arc<NotificationService>,
}

fn address_country(address: &Option<Address>) -> Option<String> {
    address.as_ref().map(|a| a.country_id.clone())
}

impl ServiceRegistry {
    /// 저장소 생성기로 모든 서비스를 조립합니다.
    pub fn build<P: RepositoryProvider>(
        provider: &P,
        audit: Arc<AuditService>,
        tokens: Arc<TokenService>,
        sender: Arc<dyn MessageSender>,
    ) -> Self {
        let country_repo = provider.repository::<Country>();
        let manufacturer_repo = provider.repository::<Manufacturer>();
        let vendor_repo = provider.repository::<Vendor>();
        let provider_repo = provider.repository::<Provider>();
        let lab_repo = provider.repository::<Lab>();
        let device_repo = provider.repository::<Device>();
        let test_case_repo = provider.repository::<TestCase>();
        let connected_test_repo = provider.repository::<ConnectedTest>();
        let email_repo = provider.repository::<EmailTemplate>();
        let sms_repo = provider.repository::<SmsTemplate>();
        let event_repo = provider.repository::<NotificationEvent>();
        let notification_repo = provider.repository::<Notification>();

        let countries = CrudService::new(country_repo.clone(), audit.clone())
            .with_guard(InUseGuard::<Country, Manufacturer>::new(
                manufacturer_repo.clone(),
                "address.countryId",
            ))
            .with_guard(InUseGuard::<Country, Vendor>::new(vendor_repo.clone(), "address.countryId"))
            .with_guard(InUseGuard::<Country, Provider>::new(provider_repo.clone(), "address.countryId"))
            .with_guard(InUseGuard::<Country, Lab>::new(lab_repo.clone(), "address.countryId"));

        let providers = CrudService::new(provider_repo, audit.clone())
            .with_guard(ReferenceGuard::<Provider, Country>::new(
                country_repo.clone(),
                "address.countryId",
                |p| address_country(&p.address),
            ));

        let labs = CrudService::new(lab_repo, audit.clone())
            .with_guard(ReferenceGuard::<Lab, Country>::new(
                country_repo.clone(),
                "address.countryId",
                |l| address_country(&l.address),
            ));

        let manufacturers = CrudService::new(manufacturer_repo.clone(), audit.clone())
            .with_guard(ReferenceGuard::<Manufacturer, Country>::new(
                country_repo.clone(),
                "address.countryId",
                |m| address_country(&m.address),
            ))
            .with_guard(InUseGuard::<Manufacturer, Device>::new(device_repo.clone(), "manufacturerId"))
            .with_guard(InUseGuard::<Manufacturer, TestCase>::new(
                test_case_repo.clone(),
                "manufacturerId",
            ));

        let vendors = CrudService::new(vendor_repo.clone(), audit.clone())
            .with_guard(ReferenceGuard::<Vendor, Country>::new(
                country_repo.clone(),
                "address.countryId",
                |v| address_country(&v.address),
            ))
            .with_guard(InUseGuard::<Vendor, Device>::new(device_repo.clone(), "vendorId"))
            .with_guard(InUseGuard::<Vendor, TestCase>::new(test_case_repo.clone(), "vendorId"));

        let devices = CrudService::new(device_repo.clone(), audit.clone())
            .with_guard(ReferenceGuard::<Device, Manufacturer>::new(
                manufacturer_repo.clone(),
                "manufacturerId",
                |d| Some(d.manufacturer_id.clone()),
            ))
            .with_guard(ReferenceGuard::<Device, Vendor>::new(
                vendor_repo.clone(),
                "vendorId",
                |d| Some(d.vendor_id.clone()),
            ))
            .with_guard(ReferenceGuard::<Device, Country>::new(
                country_repo.clone(),
                "manufacturerCountryId",
                |d| d.manufacturer_country_id.clone(),
            ))
            .with_guard(InUseGuard::<Device, ConnectedTest>::new(
                connected_test_repo.clone(),
                "deviceId",
            ));

        let test_cases = CrudService::new(test_case_repo.clone(), audit.clone())
            .with_guard(ReferenceGuard::<TestCase, Manufacturer>::new(
                manufacturer_repo.clone(),
                "manufacturerId",
                |t| Some(t.manufacturer_id.clone()),
            ))
            .with_guard(ReferenceGuard::<TestCase, Vendor>::new(
                vendor_repo.clone(),
                "vendorId",
                |t| Some(t.vendor_id.clone()),
            ));

        let connected_tests = CrudService::new(connected_test_repo.clone(), audit.clone())
            .with_guard(ReferenceGuard::<ConnectedTest, Device>::new(
                device_repo.clone(),
                "deviceId",
                |c| Some(c.device_id.clone()),
            ));

        let email_templates = CrudService::new(email_repo.clone(), audit.clone())
            .with_guard(InUseGuard::<EmailTemplate, NotificationEvent>::new(
                event_repo.clone(),
                "emailTemplateId",
            ));

        let sms_templates = CrudService::new(sms_repo.clone(), audit.clone())
            .with_guard(InUseGuard::<SmsTemplate, NotificationEvent>::new(
                event_repo.clone(),
                "smsTemplateId",
            ));

        let notification_events = CrudService::new(event_repo.clone(), audit.clone())
            .with_guard(ReferenceGuard::<NotificationEvent, EmailTemplate>::new(
                email_repo.clone(),
                "emailTemplateId",
                |e| e.email_template_id.clone(),
            ))
            .with_guard(ReferenceGuard::<NotificationEvent, SmsTemplate>::new(
                sms_repo.clone(),
                "smsTemplateId",
                |e| e.sms_template_id.clone(),
            ))
            .with_guard(InUseGuard::<NotificationEvent, Notification>::new(
                notification_repo.clone(),
                "eventId",
            ));

        let notification_guard = ReferenceGuard::<Notification, NotificationEvent>::new(
            event_repo.clone(),
            "eventId",
            |n| Some(n.event_id.clone()),
        );
        let notifications =
            Arc::new(CrudService::new(notification_repo, audit.clone()).with_guard(notification_guard));

        let notification_service = Arc::new(NotificationService::new(
            notifications.clone(),
            event_repo,
            email_repo,
            sms_repo,
            sender,
        ));

        Self {
            storage: provider.describe(),
            tokens,
            allergies: Arc::new(CrudService::new(provider.repository(), audit.clone())),
            medications: Arc::new(CrudService::new(provider.repository(), audit.clone())),
            vaccines: Arc::new(CrudService::new(provider.repository(), audit.clone())),
            doctor_notes: Arc::new(CrudService::new(provider.repository(), audit.clone())),
            medical_records: Arc::new(CrudService::new(provider.repository(), audit.clone())),
            medical_histories: Arc::new(CrudService::new(provider.repository(), audit.clone())),
            routines: Arc::new(CrudService::new(provider.repository(), audit.clone())),
            providers: Arc::new(providers),
            labs: Arc::new(labs),
            bpm: Arc::new(CrudService::new(provider.repository(), audit.clone())),
            heart_rpm: Arc::new(CrudService::new(provider.repository(), audit.clone())),
            heights: Arc::new(CrudService::new(provider.repository(), audit.clone())),
            weights: Arc::new(CrudService::new(provider.repository(), audit.clone())),
            temperatures: Arc::new(CrudService::new(provider.repository(), audit.clone())),
            connected_tests: Arc::new(connected_tests),
            countries: Arc::new(countries),
            manufacturers: Arc::new(manufacturers),
            vendors: Arc::new(vendors),
            devices: Arc::new(devices),
            test_cases: Arc::new(test_cases),
            email_templates: Arc::new(email_templates),
            sms_templates: Arc::new(sms_templates),
            notification_events: Arc::new(notification_events),
            notifications,
            notification_service,
            audit,
        }
    }

    /// 모든 리포지토리의 시작 작업(인덱스 생성 등)을 실행하고 요약을 출력합니다.
    pub async fn initialize_all(&self) -> AppResult<()> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");
        print_step_start(1, "Preparing repositories");

        let repositories: Vec<(&str, RepoInit<'_>)> = vec![
            init_entry(&self.allergies),
            init_entry(&self.medications),
            init_entry(&self.vaccines),
            init_entry(&self.doctor_notes),
            init_entry(&self.medical_records),
            init_entry(&self.medical_histories),
            init_entry(&self.routines),
            init_entry(&self.providers),
            init_entry(&self.labs),
            init_entry(&self.bpm),
            init_entry(&self.heart_rpm),
            init_entry(&self.heights),
            init_entry(&self.weights),
            init_entry(&self.temperatures),
            init_entry(&self.connected_tests),
            init_entry(&self.countries),
            init_entry(&self.manufacturers),
            init_entry(&self.vendors),
            init_entry(&self.devices),
            init_entry(&self.test_cases),
            init_entry(&self.email_templates),
            init_entry(&self.sms_templates),
            init_entry(&self.notification_events),
            init_entry(&self.notifications),
        ];

        let repo_count = repositories.len();
        for (collection, init) in repositories {
            init.await?;
            print_sub_task(collection, "✓ Ready");
        }
        print_step_complete(1, "Repositories ready", repo_count);

        print_step_start(2, "Wiring services");
        print_sub_task("storage", &self.storage);
        print_sub_task("audit", self.audit.system_name());
        print_sub_task("notification", "✓ Ready");
        // CRUD 서비스 + audit, token, notification
        let service_count = repo_count + 3;
        print_step_complete(2, "Services wired", service_count);

        print_final_summary(repo_count, service_count);
        Ok(())
    }
}

type RepoInit<'a> = std::pin::Pin<Box<dyn std::future::Future<Output = AppResult<()>> + Send + 'a>>;

fn init_entry<E: Entity>(service: &CrudService<E>) -> (&'static str, RepoInit<'_>) {
    (E::COLLECTION, service.repository().init())
}
