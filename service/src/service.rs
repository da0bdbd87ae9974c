use std::path::{Path, PathBuf};

use abi::{Config, Reservation};
use anyhow::{bail, Context, Result};
use reservation::{
    Clock, ReservationActions, ReservationTransitionPolicy, SystemClock, Transitions,
};
use tracing::{debug, info};

use crate::RsvpService;

const CONFIG_ENV: &str = "RESERVATION_CONFIG";

/// Find the config file: `$RESERVATION_CONFIG`, then `./reservation.yml`,
/// `~/.config/reservation.yml` and `/etc/reservation.yml`.
pub fn locate_config() -> Result<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return Ok(PathBuf::from(shellexpand::tilde(&path).into_owned()));
    }
    first_existing(config_candidates())
}

fn config_candidates() -> Vec<PathBuf> {
    vec![
        PathBuf::from("./reservation.yml"),
        PathBuf::from(shellexpand::tilde("~/.config/reservation.yml").into_owned()),
        PathBuf::from("/etc/reservation.yml"),
    ]
}

fn first_existing(candidates: Vec<PathBuf>) -> Result<PathBuf> {
    match candidates.into_iter().find(|p| p.exists()) {
        Some(path) => Ok(path),
        None => bail!("no reservation config found, set {}", CONFIG_ENV),
    }
}

impl RsvpService<SystemClock> {
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, SystemClock)
    }

    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?;
        info!(path = %path.display(), ?config, "loaded reservation config");
        Ok(Self::new(config))
    }

    pub fn from_default_config() -> Result<Self> {
        Self::from_config_file(locate_config()?)
    }
}

impl<C: Clock> RsvpService<C> {
    pub fn with_clock(config: Config, clock: C) -> Self {
        Self {
            policy: ReservationTransitionPolicy::with_clock(config.policy, clock),
        }
    }

    pub fn policy(&self) -> &ReservationTransitionPolicy<C> {
        &self.policy
    }

    pub fn actions(&self, rsvp: &Reservation) -> ReservationActions {
        self.policy.actions_for(rsvp)
    }

    /// Every reservation in the batch is judged against the same instant.
    pub fn actions_batch(&self, rsvps: &[Reservation]) -> Vec<ReservationActions> {
        let now = self.policy.clock().now();
        debug!(count = rsvps.len(), %now, "evaluating reservation batch");
        rsvps
            .iter()
            .map(|rsvp| self.policy.actions_at(rsvp.status, rsvp.end(), now))
            .collect()
    }
}
