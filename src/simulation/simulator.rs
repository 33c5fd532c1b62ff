//! Simulation request and runner.

use log::debug;
use serde::{Deserialize, Serialize};

use super::SimulationReport;
use crate::error::Result;
use crate::models::{Direction, Track};
use crate::policies::Policy;
use crate::registry;
use crate::validation::{self, ValidationResult};

fn default_policy() -> String {
    Policy::Fcfs.name().to_string()
}

/// Input container for a simulation run.
///
/// Deserializes from JSON such as
/// `{"requests": [82, 170, 43], "head": 50, "disk_size": 200, "direction": "right", "policy": "SCAN"}`;
/// `direction` and `policy` may be omitted (policy defaults to `"FCFS"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Track requests in arrival order.
    pub requests: Vec<Track>,
    /// Initial head position.
    pub head: Track,
    /// Number of tracks on the disk.
    pub disk_size: i64,
    /// Sweep direction for SCAN, C-SCAN, LOOK and C-LOOK.
    #[serde(default)]
    pub direction: Option<Direction>,
    /// Registered policy name.
    #[serde(default = "default_policy")]
    pub policy: String,
}

impl SimulationRequest {
    /// Creates a FCFS request with no direction.
    pub fn new(requests: Vec<Track>, head: Track, disk_size: i64) -> Self {
        Self {
            requests,
            head,
            disk_size,
            direction: None,
            policy: default_policy(),
        }
    }

    /// Sets the sweep direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Sets the policy by name.
    pub fn with_policy(mut self, policy: impl Into<String>) -> Self {
        self.policy = policy.into();
        self
    }

    /// Checks the request against the disk range.
    ///
    /// Running does not require this; it is for front ends that want to
    /// reject out-of-range input up front.
    pub fn validate(&self) -> ValidationResult {
        validation::validate_input(&self.requests, self.head, self.disk_size)
    }
}

/// Runs simulation requests through the policy registry.
///
/// # Example
///
/// ```
/// use u_disksched::models::Direction;
/// use u_disksched::simulation::{SimulationRequest, Simulator};
///
/// let request = SimulationRequest::new(vec![82, 170, 43, 140, 24, 16, 190], 50, 200)
///     .with_direction(Direction::Right)
///     .with_policy("SCAN");
///
/// let report = Simulator::new().run(&request).unwrap();
/// assert_eq!(report.thm(), 332);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    policies: Vec<Policy>,
}

impl Simulator {
    /// Creates a simulator that compares all registered policies.
    pub fn new() -> Self {
        Self {
            policies: Policy::ALL.to_vec(),
        }
    }

    /// Restricts the policies used by [`Simulator::compare`].
    pub fn with_policies(mut self, policies: Vec<Policy>) -> Self {
        self.policies = policies;
        self
    }

    /// Runs the request's policy.
    ///
    /// # Errors
    /// Any [`crate::SchedulingError`] raised by the registry or the policy.
    pub fn run(&self, request: &SimulationRequest) -> Result<SimulationReport> {
        let policy = registry::resolve(&request.policy)?;
        debug!("running {policy} for {} requests", request.requests.len());
        let sequence = policy.build(
            &request.requests,
            request.head,
            request.disk_size,
            request.direction,
        )?;
        Ok(SimulationReport::new(policy, sequence))
    }

    /// Runs every configured policy on the same input, in order.
    ///
    /// The request's own policy name is ignored. Without a direction only
    /// the policies that do not sweep (FCFS, SSTF) are run.
    ///
    /// # Errors
    /// The first failure, e.g. `InvalidDiskSize` for SCAN on an empty disk.
    pub fn compare(&self, request: &SimulationRequest) -> Result<Vec<SimulationReport>> {
        let mut reports = Vec::with_capacity(self.policies.len());
        for &policy in &self.policies {
            if policy.requires_direction() && request.direction.is_none() {
                debug!("skipping {policy}: no direction given");
                continue;
            }
            let sequence = policy.build(
                &request.requests,
                request.head,
                request.disk_size,
                request.direction,
            )?;
            reports.push(SimulationReport::new(policy, sequence));
        }
        Ok(reports)
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchedulingError;
    use crate::simulation::best_policy;

    fn textbook_request() -> SimulationRequest {
        SimulationRequest::new(vec![82, 170, 43, 140, 24, 16, 190], 50, 200)
    }

    #[test]
    fn test_request_builder() {
        let request = textbook_request()
            .with_direction(Direction::Left)
            .with_policy("C-LOOK");
        assert_eq!(request.direction, Some(Direction::Left));
        assert_eq!(request.policy, "C-LOOK");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_defaults_to_fcfs() {
        let report = Simulator::new().run(&textbook_request()).unwrap();
        assert_eq!(report.policy, Policy::Fcfs);
        assert_eq!(report.sequence, vec![50, 82, 170, 43, 140, 24, 16, 190]);
        assert_eq!(report.thm(), 642);
    }

    #[test]
    fn test_request_from_json() {
        let json = r#"{"requests": [82, 170, 43], "head": 50, "disk_size": 200,
                       "direction": "right", "policy": "C-SCAN"}"#;
        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        let report = Simulator::new().run(&request).unwrap();
        assert_eq!(report.sequence, vec![50, 82, 170, 199, 0, 43]);

        let minimal: SimulationRequest =
            serde_json::from_str(r#"{"requests": [1], "head": 0, "disk_size": 10}"#).unwrap();
        assert_eq!(minimal.policy, "FCFS");
        assert_eq!(minimal.direction, None);
    }

    #[test]
    fn test_run_unknown_policy() {
        let request = textbook_request().with_policy("RANDOM");
        let err = Simulator::new().run(&request).unwrap_err();
        assert!(matches!(err, SchedulingError::UnknownPolicy { .. }));
    }

    #[test]
    fn test_run_missing_direction() {
        let request = textbook_request().with_policy("SCAN");
        assert_eq!(
            Simulator::new().run(&request),
            Err(SchedulingError::MissingDirection {
                policy: Policy::Scan
            })
        );
    }

    #[test]
    fn test_compare_all_policies() {
        let request = textbook_request().with_direction(Direction::Right);
        let reports = Simulator::new().compare(&request).unwrap();

        let thms: Vec<(Policy, u64)> = reports.iter().map(|r| (r.policy, r.thm())).collect();
        assert_eq!(
            thms,
            vec![
                (Policy::Fcfs, 642),
                (Policy::Sstf, 208),
                (Policy::Scan, 332),
                (Policy::CScan, 391),
                (Policy::Look, 314),
                (Policy::CLook, 341),
            ]
        );
        assert_eq!(best_policy(&reports).unwrap().policy, Policy::Sstf);
    }

    #[test]
    fn test_compare_without_direction() {
        let reports = Simulator::new().compare(&textbook_request()).unwrap();
        let policies: Vec<Policy> = reports.iter().map(|r| r.policy).collect();
        assert_eq!(policies, vec![Policy::Fcfs, Policy::Sstf]);
    }

    #[test]
    fn test_compare_subset() {
        let request = textbook_request().with_direction(Direction::Left);
        let reports = Simulator::new()
            .with_policies(vec![Policy::Look, Policy::Scan])
            .compare(&request)
            .unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].policy, Policy::Look);
        assert!(reports[0].thm() < reports[1].thm());
    }

    #[test]
    fn test_compare_propagates_disk_size_error() {
        let request = SimulationRequest::new(vec![1, 2], 0, 0).with_direction(Direction::Right);
        let err = Simulator::new().compare(&request).unwrap_err();
        assert_eq!(
            err,
            SchedulingError::InvalidDiskSize {
                policy: Policy::Scan,
                disk_size: 0
            }
        );
    }
}
