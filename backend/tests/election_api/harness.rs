//! Shared world for the election API behaviour suite.
//!
//! Requests run in-process through `actix_web::test` on a dedicated actix
//! system. Repository state lives in the in-memory doubles, so each request
//! can rebuild the app without losing data.

use std::cell::RefCell;
use std::sync::Arc;

use actix_rt::SystemRunner;
use actix_web::test::{self as actix_test, TestRequest};
use actix_web::web;
use serde_json::Value;

use election_backend::domain::TRACE_ID_HEADER;
use election_backend::inbound::http::{HttpState, api_app};
use election_backend::test_support::{InMemoryCandidateRepository, InMemoryVoterRepository};

pub(crate) struct ElectionWorld {
    pub(crate) candidates: Arc<InMemoryCandidateRepository>,
    pub(crate) voters: Arc<InMemoryVoterRepository>,
    pub(crate) last_request: Option<Value>,
    pub(crate) last_status: Option<u16>,
    pub(crate) last_body: Option<Value>,
    pub(crate) last_trace_id: Option<String>,
}

pub(crate) struct WorldFixture {
    system: SystemRunner,
    world: RefCell<ElectionWorld>,
}

pub(crate) fn world() -> WorldFixture {
    WorldFixture {
        system: actix_rt::System::new(),
        world: RefCell::new(ElectionWorld {
            candidates: Arc::new(InMemoryCandidateRepository::with_parties([(
                1,
                "JS Juggernauts",
            )])),
            voters: Arc::new(InMemoryVoterRepository::default()),
            last_request: None,
            last_status: None,
            last_body: None,
            last_trace_id: None,
        }),
    }
}

impl WorldFixture {
    pub(crate) fn with<R>(&self, f: impl FnOnce(&mut ElectionWorld) -> R) -> R {
        f(&mut self.world.borrow_mut())
    }

    /// Send `request` and record the status, body and trace header.
    pub(crate) fn perform(&self, request: TestRequest) {
        let state = self.with(|world| {
            HttpState::new(world.candidates.clone(), world.voters.clone())
        });
        let (status, trace_id, bytes) = self.system.block_on(async move {
            let app = actix_test::init_service(api_app(web::Data::new(state))).await;
            let res = actix_test::call_service(&app, request.to_request()).await;
            let status = res.status().as_u16();
            let trace_id = res
                .headers()
                .get(TRACE_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            (status, trace_id, actix_test::read_body(res).await)
        });
        self.with(|world| {
            world.last_status = Some(status);
            world.last_trace_id = trace_id;
            world.last_body = if bytes.is_empty() {
                None
            } else {
                Some(serde_json::from_slice(&bytes).expect("json body"))
            };
        });
    }

    /// Send `body` as JSON, remembering it for later assertions.
    pub(crate) fn perform_json(&self, request: TestRequest, body: Value) {
        self.with(|world| world.last_request = Some(body.clone()));
        self.perform(request.set_json(body));
    }
}
