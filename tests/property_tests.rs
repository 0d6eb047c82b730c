//! Property tests for guard decisions.
//!
//! These tests check the dispatch invariants over arbitrary requests: the
//! wrapped handler runs at most once, and only when the guard's predicate
//! holds; repeated evaluation of the same request gives the same answer.

use std::cell::Cell;

use http::header::LOCATION;
use http::{Response, StatusCode};
use proptest::prelude::*;
use request_guard::response::{LOGIN_URL_HEADER, REQUIRES_AUTH_HEADER};
use request_guard::web::RequestAdapter;
use request_guard::{
    ajax_required, anonymous_required, anonymous_required_to, login_required, Guard, GuardConfig,
    GuardRequest, Handler, Principal, RequireAjax, RequireAnonymous, RequireLogin,
};

// Strategy: Generate arbitrary principal
fn arb_principal() -> impl Strategy<Value = Principal> {
    (
        prop::string::string_regex("[a-z0-9-]{3,10}").unwrap(),
        prop::string::string_regex("[A-Za-z ]{3,15}").unwrap(),
    )
        .prop_map(|(id, name)| Principal { id, name })
}

// Strategy: Generate a request with arbitrary auth state, transport and path
fn arb_request() -> impl Strategy<Value = RequestAdapter> {
    (
        prop::string::string_regex("[a-z0-9-]{5,20}").unwrap(),
        prop::option::of(arb_principal()),
        any::<bool>(),
        prop::string::string_regex("/[a-z0-9/]{0,20}(\\?[a-z]=[0-9]{1,3})?").unwrap(),
    )
        .prop_map(|(request_id, principal, ajax, path)| {
            let mut req = RequestAdapter::new(request_id);
            req.set_principal(principal);
            req.set_path(path);
            if ajax {
                req.mark_ajax();
            }
            req
        })
}

fn is_ajax(req: &RequestAdapter) -> bool {
    req.headers().contains_key("x-requested-with")
}

proptest! {
    /// Property: login guard runs the handler exactly when authenticated
    #[test]
    fn proptest_login_required_dispatch(
        req in arb_request(),
        login_url in prop::string::string_regex("/[a-z]{1,10}/").unwrap()
    ) {
        let config = GuardConfig::new(&login_url).unwrap();
        let calls = Cell::new(0);
        let view = login_required(
            |_: &RequestAdapter| {
                calls.set(calls.get() + 1);
                Response::new("view".to_string())
            },
            &config,
        );

        let res = view.handle(&req);

        match (req.is_authenticated(), is_ajax(&req)) {
            (true, _) => {
                prop_assert_eq!(calls.get(), 1);
                prop_assert_eq!(res.body(), "view");
                prop_assert!(res.headers().is_empty());
            }
            (false, true) => {
                prop_assert_eq!(calls.get(), 0);
                prop_assert_eq!(res.status(), StatusCode::OK);
                prop_assert_eq!(&res.headers()[REQUIRES_AUTH_HEADER], "True");
                prop_assert_eq!(&res.headers()[LOGIN_URL_HEADER], login_url.as_str());
            }
            (false, false) => {
                prop_assert_eq!(calls.get(), 0);
                prop_assert_eq!(res.status(), StatusCode::FOUND);
                prop_assert_eq!(&res.headers()[LOCATION], login_url.as_str());
            }
        }
    }

    /// Property: AJAX-only guard ignores authentication entirely
    #[test]
    fn proptest_ajax_required_dispatch(req in arb_request()) {
        let calls = Cell::new(0);
        let view = ajax_required(|_: &RequestAdapter| {
            calls.set(calls.get() + 1);
            Response::new("view".to_string())
        });

        let res = view.handle(&req);

        if is_ajax(&req) {
            prop_assert_eq!(calls.get(), 1);
            prop_assert_eq!(res.body(), "view");
        } else {
            prop_assert_eq!(calls.get(), 0);
            prop_assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        }
    }

    /// Property: anonymous guard redirects every authenticated caller to the
    /// configured target, whatever the path or transport
    #[test]
    fn proptest_anonymous_required_dispatch(
        req in arb_request(),
        target in prop::option::of(prop::string::string_regex("/[a-z]{1,10}/").unwrap())
    ) {
        let calls = Cell::new(0);
        let handler = |_: &RequestAdapter| {
            calls.set(calls.get() + 1);
            Response::new("view".to_string())
        };

        let (res, expected) = match &target {
            Some(target) => (
                anonymous_required_to(handler, target).unwrap().handle(&req),
                target.as_str(),
            ),
            None => (anonymous_required(handler).handle(&req), "/"),
        };

        if req.is_authenticated() {
            prop_assert_eq!(calls.get(), 0);
            prop_assert_eq!(res.status(), StatusCode::FOUND);
            prop_assert_eq!(&res.headers()[LOCATION], expected);
        } else {
            prop_assert_eq!(calls.get(), 1);
            prop_assert_eq!(res.body(), "view");
        }
    }

    /// Property: evaluating a guard twice on the same request gives the same
    /// decision and the same response class
    #[test]
    fn proptest_decisions_are_idempotent(req in arb_request()) {
        let login = RequireLogin::default();
        let ajax = RequireAjax::default();
        let anonymous = RequireAnonymous::default();

        prop_assert_eq!(login.check(&req), login.check(&req));
        prop_assert_eq!(ajax.check(&req), ajax.check(&req));
        prop_assert_eq!(anonymous.check(&req), anonymous.check(&req));

        let view = login.wrap(|_: &RequestAdapter| Response::new(()));
        let first = view.handle(&req);
        let second = view.handle(&req);
        prop_assert_eq!(first.status(), second.status());
        prop_assert_eq!(first.headers(), second.headers());
    }

    /// Property: exactly one of the login and anonymous guards admits any
    /// given request
    #[test]
    fn proptest_login_and_anonymous_are_complementary(req in arb_request()) {
        let login = RequireLogin::default().check(&req).is_ok();
        let anonymous = RequireAnonymous::default().check(&req).is_ok();
        prop_assert!(login != anonymous);
    }
}
