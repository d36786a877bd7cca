use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};
use veritag_crypto::KeyPair;
use veritag_registry::{FallbackProvider, Registry, TxReceipt};
use veritag_store::{gateway_url, ContentStore, DEFAULT_GATEWAY};
use veritag_types::{
    BrandId, CallerId, ContentId, ProductDocument, ProductId, SerialNumber, Tag, TagMessage,
};

use crate::error::PipelineError;
use crate::receipt::RegistrationReceipt;
use crate::report::{Diagnostics, VerificationReport};
use crate::request::{RegistrationRequest, VerificationRequest};

/// Substituted when an asset upload fails; registration proceeds.
const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/300x300?text=Image+Unavailable";

/// Orchestrates registry ledger, content store, and signature engine.
///
/// Holds no mutable state of its own; every call is an independent
/// request/response. The fallback provider is injected so embedders decide
/// which locally held records may stand in for an unreachable ledger.
pub struct Pipeline {
    registry: Arc<dyn Registry>,
    store: Arc<dyn ContentStore>,
    fallback: Arc<dyn FallbackProvider>,
    caller: CallerId,
    gateway_base: String,
}

impl Pipeline {
    pub fn new(
        registry: Arc<dyn Registry>,
        store: Arc<dyn ContentStore>,
        fallback: Arc<dyn FallbackProvider>,
        caller: CallerId,
    ) -> Self {
        Self {
            registry,
            store,
            fallback,
            caller,
            gateway_base: DEFAULT_GATEWAY.to_string(),
        }
    }

    /// Override the gateway base used to render retrieval URLs.
    pub fn with_gateway(mut self, base: impl Into<String>) -> Self {
        self.gateway_base = base.into();
        self
    }

    /// Register a brand on the ledger. Thin passthrough: brand registration
    /// has no off-chain side.
    pub fn register_brand(&self, brand_id: &BrandId) -> Result<TxReceipt, PipelineError> {
        Ok(self.registry.register_brand(&self.caller, brand_id)?)
    }

    /// Registration path: validate, store the document, mint the tag
    /// identity, commit the binding to the ledger.
    ///
    /// Store failures are degraded, not fatal: a failed asset upload
    /// substitutes a placeholder URL, a failed document put substitutes a
    /// synthetic content identifier, and registration completes either way.
    /// Ledger failures are fatal and surface verbatim.
    pub fn register_product(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationReceipt, PipelineError> {
        let violations = request.violations();
        if !violations.is_empty() {
            return Err(PipelineError::Validation(violations));
        }

        let product_id = parse_validated(ProductId::parse(&request.product_id))?;
        let brand_id = parse_validated(BrandId::parse(&request.brand_id))?;
        let serial_number = parse_validated(SerialNumber::parse(&request.serial_number))?;

        let image_url = request.image.as_deref().map(|bytes| self.upload_asset(bytes));

        let stamp = chrono::Utc::now().to_rfc3339();
        let document = ProductDocument {
            product_id: request.product_id.clone(),
            brand_id: request.brand_id.clone(),
            name: request.name.clone(),
            serial_number: request.serial_number.clone(),
            manufacture_date: request.manufacture_date.clone(),
            description: request.description.clone(),
            model: request.model.clone(),
            price: request.price,
            specifications: request.specifications.clone(),
            warranty: request.warranty.clone(),
            image_url: image_url.clone(),
            registration_date: Some(stamp.clone()),
            last_updated: Some(stamp.clone()),
        };

        let started = Instant::now();
        let content_id = match self.store.put(&document) {
            Ok(id) => {
                debug!(
                    content_id = %id,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "document stored"
                );
                id
            }
            Err(e) => {
                let id = synthetic_content_id();
                warn!(error = %e, content_id = %id, "document put failed; substituting synthetic content id");
                id
            }
        };

        // Each registration mints its own key pair; the pipeline never
        // reuses caller-supplied keys for the on-chain identity.
        let key_pair = KeyPair::generate();
        let message = TagMessage::new(
            request.product_id.clone(),
            request.brand_id.clone(),
            request.serial_number.clone(),
        )
        .canonical_json()?;
        let signature = veritag_crypto::sign(message.as_bytes(), key_pair.private_key())?;

        let tx = self.registry.register_product(
            &self.caller,
            &product_id,
            &content_id,
            key_pair.public_key(),
        )?;

        Ok(RegistrationReceipt {
            tx_hash: tx.tx_hash,
            block_number: tx.block_number,
            content_url: gateway_url(&self.gateway_base, &content_id),
            content_id,
            signature,
            tag_public_key: key_pair.public_key().to_string(),
            key_pair,
            signed_message: message,
            product_id,
            brand_id,
            serial_number,
            image_url,
            timestamp: stamp,
        })
    }

    /// Verification path: resolve the ledger record (or a fallback),
    /// fetch the document (or a labeled stand-in), check the signature,
    /// cross-check the claimed fields, and return one composite report.
    ///
    /// Partial subsystem failures never prevent a decision; the only
    /// terminal failure is a ledger miss with no fallback record, in which
    /// case the tag cannot be trusted at all.
    pub fn verify_product(
        &self,
        product_id: &ProductId,
        request: &VerificationRequest,
    ) -> Result<VerificationReport, PipelineError> {
        let mut diagnostics = Diagnostics::default();
        let mut using_fallback = false;

        let info = match self.registry.get_product(product_id) {
            Ok(info) => info,
            Err(e) => {
                diagnostics.blockchain_error = Some(e.to_string());
                match self.fallback.lookup(product_id) {
                    Some(info) => {
                        warn!(product_id = %product_id, error = %e, "ledger lookup failed; using fallback record");
                        using_fallback = true;
                        info
                    }
                    None => {
                        return Err(PipelineError::ProductUnavailable {
                            product_id: product_id.to_string(),
                            reason: e.to_string(),
                        });
                    }
                }
            }
        };

        let registration_time = rfc3339_from_unix(info.registration_time);

        let started = Instant::now();
        let document = match self.store.get(&info.content_id) {
            Ok(doc) => {
                debug!(
                    content_id = %info.content_id,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "document fetched"
                );
                doc
            }
            Err(e) => {
                diagnostics.store_error = Some(e.to_string());
                if using_fallback {
                    warn!(product_id = %product_id, "store fetch failed in fallback mode; synthesizing placeholder document");
                    ProductDocument::placeholder(
                        product_id.as_str(),
                        &request.brand_id,
                        registration_time.clone(),
                    )
                } else {
                    warn!(product_id = %product_id, error = %e, "store fetch failed; continuing with unknown-product document");
                    ProductDocument::unknown(product_id.as_str(), registration_time.clone())
                }
            }
        };

        // The signature covers the message as registered, so it is rebuilt
        // from the resolved document. A caller-supplied field that differs
        // flips its match flag without disturbing the signature check.
        let message = TagMessage::new(
            product_id.as_str(),
            document.brand_id.clone(),
            document.serial_number.clone(),
        )
        .canonical_json()?;

        let signature_valid = match veritag_crypto::verify(
            message.as_bytes(),
            &request.signature,
            &request.tag_public_key,
        ) {
            Ok(valid) => valid,
            Err(e) => {
                diagnostics.signature_error = Some(e.to_string());
                false
            }
        };
        diagnostics.message = message;

        let brand_id_match = document.brand_id == request.brand_id;
        let serial_number_match = document.serial_number == request.serial_number;
        let product_id_match = document.product_id == product_id.as_str();

        Ok(VerificationReport {
            content_url: gateway_url(&self.gateway_base, &info.content_id),
            content_id: info.content_id,
            public_key: info.public_key,
            registration_time,
            is_active: info.is_active,
            document,
            signature_valid,
            brand_id_match,
            serial_number_match,
            product_id_match,
            verified_at: chrono::Utc::now().to_rfc3339(),
            using_fallback_data: using_fallback,
            diagnostics,
        })
    }

    /// Verify a scanned tag payload. Convenience over
    /// [`Self::verify_product`] for callers holding a whole [`Tag`].
    pub fn verify_tag(&self, tag: &Tag) -> Result<VerificationReport, PipelineError> {
        let request = VerificationRequest {
            brand_id: tag.brand_id.to_string(),
            serial_number: tag.serial_number.to_string(),
            signature: tag.signature.clone(),
            tag_public_key: tag.public_key.clone(),
        };
        self.verify_product(&tag.product_id, &request)
    }

    fn upload_asset(&self, bytes: &[u8]) -> String {
        let started = Instant::now();
        match self.store.put_blob(bytes) {
            Ok(id) => {
                debug!(
                    content_id = %id,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "asset stored"
                );
                gateway_url(&self.gateway_base, &id)
            }
            Err(e) => {
                warn!(error = %e, "asset upload failed; substituting placeholder url");
                PLACEHOLDER_IMAGE_URL.to_string()
            }
        }
    }
}

/// Identifier parse after the violation check has passed; a failure here
/// still reports as validation rather than panicking.
fn parse_validated<T>(parsed: Result<T, veritag_types::TypeError>) -> Result<T, PipelineError> {
    parsed.map_err(|e| PipelineError::Validation(vec![e.to_string()]))
}

fn synthetic_content_id() -> ContentId {
    let nonce: [u8; 8] = rand::random();
    ContentId::new(format!("unpinned-{}", hex::encode(nonce)))
}

fn rfc3339_from_unix(secs: i64) -> String {
    chrono::DateTime::from_timestamp(secs, 0)
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| secs.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use veritag_registry::{
        BrandInfo, InMemoryFallback, InMemoryRegistry, NoFallback, ProductInfo, RegistryError,
        RegistryReader, RegistryWriter,
    };
    use veritag_store::{
        InMemoryContentStore, StoreError, StoreResult, UnavailableContentStore,
    };

    const OWNER: &str = "registry-owner";

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    fn request() -> RegistrationRequest {
        RegistrationRequest {
            product_id: "PROD001".into(),
            brand_id: "BRAND001".into(),
            name: "Demo Watch".into(),
            serial_number: "SN-1".into(),
            manufacture_date: "2024-05-01".into(),
            ..Default::default()
        }
    }

    fn verification(receipt: &RegistrationReceipt) -> VerificationRequest {
        VerificationRequest {
            brand_id: receipt.brand_id.to_string(),
            serial_number: receipt.serial_number.to_string(),
            signature: receipt.signature.clone(),
            tag_public_key: receipt.tag_public_key.clone(),
        }
    }

    fn wired(
        store: Arc<dyn ContentStore>,
        fallback: Arc<dyn FallbackProvider>,
    ) -> (Pipeline, Arc<InMemoryRegistry>) {
        let registry = Arc::new(InMemoryRegistry::new(CallerId::new(OWNER)));
        let pipeline = Pipeline::new(
            registry.clone(),
            store,
            fallback,
            CallerId::new(OWNER),
        );
        (pipeline, registry)
    }

    fn product_id(id: &str) -> ProductId {
        ProductId::parse(id).unwrap()
    }

    // -----------------------------------------------------------------------
    // Registration path
    // -----------------------------------------------------------------------

    #[test]
    fn registration_returns_composite_receipt() {
        init_tracing();
        let (pipeline, registry) = wired(
            Arc::new(InMemoryContentStore::new()),
            Arc::new(NoFallback),
        );
        pipeline
            .register_brand(&BrandId::parse("BRAND001").unwrap())
            .unwrap();

        let receipt = pipeline.register_product(&request()).unwrap();

        assert!(receipt.tx_hash.starts_with("0x"));
        assert_eq!(
            receipt.signed_message,
            r#"{"productId":"PROD001","brandId":"BRAND001","serialNumber":"SN-1"}"#
        );
        assert_eq!(receipt.tag_public_key, receipt.key_pair.public_key());
        assert!(receipt.content_url.ends_with(receipt.content_id.as_str()));

        // The ledger holds the same binding the receipt reports.
        let info = registry.get_product(&receipt.product_id).unwrap();
        assert_eq!(info.content_id, receipt.content_id);
        assert_eq!(info.public_key, receipt.tag_public_key);
    }

    #[test]
    fn each_registration_mints_a_fresh_key_pair() {
        let (pipeline, _) = wired(
            Arc::new(InMemoryContentStore::new()),
            Arc::new(NoFallback),
        );
        let first = pipeline.register_product(&request()).unwrap();
        let mut second_request = request();
        second_request.product_id = "PROD002".into();
        let second = pipeline.register_product(&second_request).unwrap();
        assert_ne!(first.tag_public_key, second.tag_public_key);
    }

    #[test]
    fn invalid_input_reports_every_violation_and_writes_nothing() {
        let (pipeline, registry) = wired(
            Arc::new(InMemoryContentStore::new()),
            Arc::new(NoFallback),
        );

        let bad = RegistrationRequest {
            product_id: "p!".into(),
            serial_number: "sn".into(),
            ..Default::default()
        };
        let err = pipeline.register_product(&bad).unwrap_err();
        match err {
            PipelineError::Validation(violations) => assert!(violations.len() >= 4),
            other => panic!("expected validation error, got {other:?}"),
        }

        assert!(registry.events().unwrap().is_empty());
    }

    #[test]
    fn duplicate_registration_surfaces_already_exists() {
        let (pipeline, _) = wired(
            Arc::new(InMemoryContentStore::new()),
            Arc::new(NoFallback),
        );
        pipeline.register_product(&request()).unwrap();
        let err = pipeline.register_product(&request()).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Registry(RegistryError::AlreadyExists(_))
        ));
    }

    #[test]
    fn store_outage_substitutes_synthetic_content_id() {
        let (pipeline, registry) = wired(
            Arc::new(UnavailableContentStore::new()),
            Arc::new(NoFallback),
        );

        let receipt = pipeline.register_product(&request()).unwrap();
        assert!(receipt.content_id.as_str().starts_with("unpinned-"));

        // The binding still committed to the ledger.
        let info = registry.get_product(&receipt.product_id).unwrap();
        assert_eq!(info.content_id, receipt.content_id);
    }

    #[test]
    fn synthetic_content_ids_do_not_collide() {
        assert_ne!(synthetic_content_id(), synthetic_content_id());
    }

    // Store whose document side works but whose blob side is down, for
    // exercising the asset-upload degraded path in isolation.
    struct BloblessStore(InMemoryContentStore);

    impl ContentStore for BloblessStore {
        fn put(&self, document: &ProductDocument) -> StoreResult<ContentId> {
            self.0.put(document)
        }
        fn put_blob(&self, _bytes: &[u8]) -> StoreResult<ContentId> {
            Err(StoreError::Unavailable("blob endpoint offline".into()))
        }
        fn get(&self, id: &ContentId) -> StoreResult<ProductDocument> {
            self.0.get(id)
        }
    }

    #[test]
    fn asset_upload_success_records_gateway_url() {
        let store = Arc::new(InMemoryContentStore::new());
        let (pipeline, _) = wired(store.clone(), Arc::new(NoFallback));

        let mut with_image = request();
        with_image.image = Some(b"\x89PNG fake image bytes".to_vec());
        let receipt = pipeline.register_product(&with_image).unwrap();

        let image_url = receipt.image_url.expect("image url should be recorded");
        assert!(image_url.starts_with(DEFAULT_GATEWAY));

        // The stored document carries the same URL.
        let document = store.get(&receipt.content_id).unwrap();
        assert_eq!(document.image_url.as_deref(), Some(image_url.as_str()));
    }

    #[test]
    fn asset_upload_failure_substitutes_placeholder_url() {
        let (pipeline, _) = wired(
            Arc::new(BloblessStore(InMemoryContentStore::new())),
            Arc::new(NoFallback),
        );

        let mut with_image = request();
        with_image.image = Some(b"image bytes".to_vec());
        let receipt = pipeline.register_product(&with_image).unwrap();
        assert_eq!(receipt.image_url.as_deref(), Some(PLACEHOLDER_IMAGE_URL));
    }

    // -----------------------------------------------------------------------
    // Verification path, healthy dependencies
    // -----------------------------------------------------------------------

    #[test]
    fn round_trip_verification_passes_all_checks() {
        let (pipeline, _) = wired(
            Arc::new(InMemoryContentStore::new()),
            Arc::new(NoFallback),
        );
        pipeline
            .register_brand(&BrandId::parse("BRAND001").unwrap())
            .unwrap();
        let receipt = pipeline.register_product(&request()).unwrap();

        let report = pipeline
            .verify_product(&receipt.product_id, &verification(&receipt))
            .unwrap();

        assert!(report.all_checks_passed());
        assert!(report.is_active);
        assert!(!report.using_fallback_data);
        assert_eq!(report.diagnostics.blockchain_error, None);
        assert_eq!(report.diagnostics.store_error, None);
        assert_eq!(report.diagnostics.signature_error, None);
        assert_eq!(report.diagnostics.message, receipt.signed_message);
    }

    #[test]
    fn scanned_tag_verifies_end_to_end() {
        let (pipeline, _) = wired(
            Arc::new(InMemoryContentStore::new()),
            Arc::new(NoFallback),
        );
        let receipt = pipeline.register_product(&request()).unwrap();

        // The receipt's tag payload is exactly what a scanner reads back.
        let report = pipeline.verify_tag(&receipt.tag()).unwrap();
        assert!(report.all_checks_passed());
        assert!(!report.using_fallback_data);
    }

    #[test]
    fn mutated_serial_flips_match_but_not_signature() {
        let (pipeline, _) = wired(
            Arc::new(InMemoryContentStore::new()),
            Arc::new(NoFallback),
        );
        let receipt = pipeline.register_product(&request()).unwrap();

        let mut tampered = verification(&receipt);
        tampered.serial_number = "SN-2".into();
        let report = pipeline
            .verify_product(&receipt.product_id, &tampered)
            .unwrap();

        // The signature covers the registered message; only the comparison
        // field supplied afterward differs.
        assert!(!report.serial_number_match);
        assert!(report.signature_valid);
        assert!(report.brand_id_match);
        assert!(report.product_id_match);
        assert!(!report.all_checks_passed());
    }

    #[test]
    fn foreign_signature_fails_cleanly() {
        let (pipeline, _) = wired(
            Arc::new(InMemoryContentStore::new()),
            Arc::new(NoFallback),
        );
        let receipt = pipeline.register_product(&request()).unwrap();

        // A valid signature from an unrelated key.
        let foreign = KeyPair::generate();
        let mut forged = verification(&receipt);
        forged.signature =
            veritag_crypto::sign(receipt.signed_message.as_bytes(), foreign.private_key()).unwrap();

        let report = pipeline
            .verify_product(&receipt.product_id, &forged)
            .unwrap();
        assert!(!report.signature_valid);
        assert_eq!(report.diagnostics.signature_error, None);
        // Field comparisons are independent of the signature outcome.
        assert!(report.brand_id_match);
        assert!(report.serial_number_match);
    }

    #[test]
    fn undecodable_signature_becomes_a_diagnostic() {
        let (pipeline, _) = wired(
            Arc::new(InMemoryContentStore::new()),
            Arc::new(NoFallback),
        );
        let receipt = pipeline.register_product(&request()).unwrap();

        let mut garbled = verification(&receipt);
        garbled.signature = "not hex".into();
        let report = pipeline
            .verify_product(&receipt.product_id, &garbled)
            .unwrap();

        assert!(!report.signature_valid);
        assert!(report.diagnostics.signature_error.is_some());
    }

    #[test]
    fn unregistered_product_is_terminal_without_fallback() {
        let (pipeline, _) = wired(
            Arc::new(InMemoryContentStore::new()),
            Arc::new(NoFallback),
        );
        let request = VerificationRequest {
            brand_id: "BRAND001".into(),
            serial_number: "SN-1".into(),
            signature: "00".repeat(64),
            tag_public_key: "00".repeat(32),
        };
        let err = pipeline
            .verify_product(&product_id("PROD404"), &request)
            .unwrap_err();
        assert!(matches!(err, PipelineError::ProductUnavailable { .. }));
    }

    // -----------------------------------------------------------------------
    // Verification path, degraded dependencies
    // -----------------------------------------------------------------------

    #[test]
    fn deactivated_product_without_fallback_is_untrusted() {
        let (pipeline, registry) = wired(
            Arc::new(InMemoryContentStore::new()),
            Arc::new(NoFallback),
        );
        let receipt = pipeline.register_product(&request()).unwrap();
        registry
            .deactivate_product(&CallerId::new(OWNER), &receipt.product_id)
            .unwrap();

        let err = pipeline
            .verify_product(&receipt.product_id, &verification(&receipt))
            .unwrap_err();
        assert!(matches!(err, PipelineError::ProductUnavailable { .. }));
    }

    #[test]
    fn deactivated_product_with_fallback_returns_flagged_report() {
        let store = Arc::new(InMemoryContentStore::new());
        let fallback = Arc::new(InMemoryFallback::new());
        let (pipeline, registry) = wired(store, fallback.clone());

        let receipt = pipeline.register_product(&request()).unwrap();
        registry
            .deactivate_product(&CallerId::new(OWNER), &receipt.product_id)
            .unwrap();

        fallback.insert(
            receipt.product_id.clone(),
            ProductInfo {
                content_id: receipt.content_id.clone(),
                public_key: receipt.tag_public_key.clone(),
                registration_time: chrono::Utc::now().timestamp(),
                is_active: true,
            },
        );

        let report = pipeline
            .verify_product(&receipt.product_id, &verification(&receipt))
            .unwrap();

        assert!(report.using_fallback_data);
        assert!(report.diagnostics.blockchain_error.is_some());
        // The document is still store-backed, so the checks pass; the
        // fallback flag is what tells the caller not to treat this as
        // chain-backed truth.
        assert!(report.all_checks_passed());
    }

    struct UnreachableRegistry;

    impl RegistryWriter for UnreachableRegistry {
        fn register_brand(
            &self,
            _caller: &CallerId,
            _brand_id: &BrandId,
        ) -> Result<TxReceipt, RegistryError> {
            Err(RegistryError::Unreachable("rpc timeout".into()))
        }
        fn register_product(
            &self,
            _caller: &CallerId,
            _product_id: &ProductId,
            _content_id: &ContentId,
            _public_key: &str,
        ) -> Result<TxReceipt, RegistryError> {
            Err(RegistryError::Unreachable("rpc timeout".into()))
        }
        fn deactivate_product(
            &self,
            _caller: &CallerId,
            _product_id: &ProductId,
        ) -> Result<TxReceipt, RegistryError> {
            Err(RegistryError::Unreachable("rpc timeout".into()))
        }
    }

    impl RegistryReader for UnreachableRegistry {
        fn get_product(&self, _product_id: &ProductId) -> Result<ProductInfo, RegistryError> {
            Err(RegistryError::Unreachable("rpc timeout".into()))
        }
        fn is_brand_registered(&self, _brand_id: &BrandId) -> Result<bool, RegistryError> {
            Err(RegistryError::Unreachable("rpc timeout".into()))
        }
        fn get_brand(&self, _brand_id: &BrandId) -> Result<BrandInfo, RegistryError> {
            Err(RegistryError::Unreachable("rpc timeout".into()))
        }
    }

    #[test]
    fn ledger_and_store_both_down_still_yields_a_decision() {
        init_tracing();
        let fallback = Arc::new(InMemoryFallback::new());
        fallback.insert(
            product_id("PROD001"),
            ProductInfo {
                content_id: ContentId::new("Qm...fallback"),
                public_key: "ab".repeat(32),
                registration_time: 1_714_521_600,
                is_active: true,
            },
        );

        let pipeline = Pipeline::new(
            Arc::new(UnreachableRegistry),
            Arc::new(UnavailableContentStore::new()),
            fallback,
            CallerId::new(OWNER),
        );

        let request = VerificationRequest {
            brand_id: "BRAND001".into(),
            serial_number: "SN-1".into(),
            signature: "00".repeat(64),
            tag_public_key: "00".repeat(32),
        };
        let report = pipeline
            .verify_product(&product_id("PROD001"), &request)
            .unwrap();

        // Every flag is present even though both dependencies failed.
        assert!(report.using_fallback_data);
        assert!(report.diagnostics.blockchain_error.is_some());
        assert!(report.diagnostics.store_error.is_some());
        assert!(!report.signature_valid);
        // The placeholder document echoes the claimed identity fields.
        assert!(report.product_id_match);
        assert!(report.brand_id_match);
    }

    #[test]
    fn store_fetch_failure_outside_fallback_degrades_to_unknown_document() {
        let registry = Arc::new(InMemoryRegistry::new(CallerId::new(OWNER)));

        // Register through a healthy store, then verify through a pipeline
        // whose store is down but whose ledger is the same.
        let healthy = Pipeline::new(
            registry.clone(),
            Arc::new(InMemoryContentStore::new()),
            Arc::new(NoFallback),
            CallerId::new(OWNER),
        );
        let receipt = healthy.register_product(&request()).unwrap();

        let degraded = Pipeline::new(
            registry,
            Arc::new(UnavailableContentStore::new()),
            Arc::new(NoFallback),
            CallerId::new(OWNER),
        );
        let report = degraded
            .verify_product(&receipt.product_id, &verification(&receipt))
            .unwrap();

        assert!(!report.using_fallback_data);
        assert!(report.diagnostics.store_error.is_some());
        // The unknown-product stand-in matches nothing except the queried id.
        assert!(report.product_id_match);
        assert!(!report.brand_id_match);
        assert!(!report.serial_number_match);
        assert!(!report.signature_valid);
        assert_eq!(report.document.name, "Unknown Product");
    }
}
