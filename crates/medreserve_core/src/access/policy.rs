//! Pure access-policy decision functions.

use crate::model::role::Role;
use crate::model::session::Session;

/// Public landing page.
pub const HOME_PATH: &str = "/";
/// Login form route; unauthenticated denials land here.
pub const LOGIN_PATH: &str = "/login";
/// Admin default landing route.
pub const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";
/// Doctor default landing route.
pub const DOCTOR_DASHBOARD_PATH: &str = "/doctor/dashboard";
/// Patient default landing route.
pub const PATIENT_DASHBOARD_PATH: &str = "/patient/dashboard";

/// Outcome of one access evaluation.
///
/// A wrong-role denial is deliberately invisible to the user: the redirect
/// target is their own dashboard, not an error page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Deny {
        /// Client-side route to bounce to.
        redirect_to: &'static str,
        /// Whether the originally requested location should be preserved
        /// for a post-login return. Only set for unauthenticated denials.
        remember_location: bool,
    },
}

impl AccessDecision {
    pub fn is_allow(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Default landing route per role.
///
/// Total over the role enum: adding a role without a landing route is a
/// compile error, not a runtime fallback.
pub fn default_landing_for(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_DASHBOARD_PATH,
        Role::Doctor => DOCTOR_DASHBOARD_PATH,
        Role::User => PATIENT_DASHBOARD_PATH,
    }
}

/// Evaluates access for a session snapshot against a route's role rule.
///
/// `None` means unauthenticated. An empty `required_roles` slice means any
/// authenticated role may pass.
pub fn evaluate(session: Option<&Session>, required_roles: &[Role]) -> AccessDecision {
    evaluate_role(session.map(|session| session.role), required_roles)
}

/// Role-only form of [`evaluate`]; the session carries no other input to
/// the decision.
///
/// Priority order:
/// 1. unauthenticated -> deny to the login route, remembering the origin;
/// 2. authenticated but not a member of a non-empty rule -> deny to the
///    user's own landing route;
/// 3. otherwise allow.
pub fn evaluate_role(session_role: Option<Role>, required_roles: &[Role]) -> AccessDecision {
    let Some(role) = session_role else {
        return AccessDecision::Deny {
            redirect_to: LOGIN_PATH,
            remember_location: true,
        };
    };

    if !required_roles.is_empty() && !required_roles.contains(&role) {
        return AccessDecision::Deny {
            redirect_to: default_landing_for(role),
            remember_location: false,
        };
    }

    AccessDecision::Allow
}

#[cfg(test)]
mod tests {
    use super::{
        default_landing_for, evaluate_role, AccessDecision, ADMIN_DASHBOARD_PATH,
        DOCTOR_DASHBOARD_PATH, LOGIN_PATH, PATIENT_DASHBOARD_PATH,
    };
    use crate::model::role::Role;

    #[test]
    fn every_role_has_a_distinct_landing_route() {
        assert_eq!(default_landing_for(Role::Admin), ADMIN_DASHBOARD_PATH);
        assert_eq!(default_landing_for(Role::Doctor), DOCTOR_DASHBOARD_PATH);
        assert_eq!(default_landing_for(Role::User), PATIENT_DASHBOARD_PATH);

        let mut landings: Vec<&str> = Role::all().iter().map(|r| default_landing_for(*r)).collect();
        landings.sort_unstable();
        landings.dedup();
        assert_eq!(landings.len(), Role::all().len());
    }

    #[test]
    fn unauthenticated_always_denies_to_login() {
        let rules: [&[Role]; 4] = [
            &[],
            &[Role::Admin],
            &[Role::Doctor, Role::User],
            &[Role::Admin, Role::Doctor, Role::User],
        ];
        for rule in rules {
            assert_eq!(
                evaluate_role(None, rule),
                AccessDecision::Deny {
                    redirect_to: LOGIN_PATH,
                    remember_location: true,
                }
            );
        }
    }

    #[test]
    fn empty_rule_admits_any_authenticated_role() {
        for role in Role::all() {
            assert!(evaluate_role(Some(role), &[]).is_allow());
        }
    }

    #[test]
    fn member_roles_pass_and_others_bounce_to_own_landing() {
        for role in Role::all() {
            for required in Role::all() {
                let decision = evaluate_role(Some(role), &[required]);
                if role == required {
                    assert!(decision.is_allow());
                } else {
                    assert_eq!(
                        decision,
                        AccessDecision::Deny {
                            redirect_to: default_landing_for(role),
                            remember_location: false,
                        }
                    );
                }
            }
        }
    }

    #[test]
    fn authenticated_denial_never_targets_login() {
        for role in Role::all() {
            for required in Role::all() {
                if let AccessDecision::Deny { redirect_to, .. } =
                    evaluate_role(Some(role), &[required])
                {
                    assert_ne!(redirect_to, LOGIN_PATH);
                }
            }
        }
    }
}
