use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::fmt;

/// One of the five answers a user can give to the poll.
///
/// The backend stores and echoes the bare variant name, so the serde
/// representation is the externally tagged default (`"NotStarted"` etc).

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PollOption {
    NoWebtech,
    NotStarted,
    Started,
    Done,
    DoneWebtech,
}

pub struct PollOptionParseError;

impl PollOption {
    /// All options, in the order they are rendered and charted.
    pub const ALL: [PollOption; 5] = [
        PollOption::NoWebtech,
        PollOption::NotStarted,
        PollOption::Started,
        PollOption::Done,
        PollOption::DoneWebtech,
    ];
}

impl FromStr for PollOption {
    type Err = PollOptionParseError;
    fn from_str(input: &str) -> Result<PollOption, Self::Err> {
        match input.to_lowercase().as_str() {
            "no webtech" => Ok(PollOption::NoWebtech),
            "not started" => Ok(PollOption::NotStarted),
            "started" => Ok(PollOption::Started),
            "done" => Ok(PollOption::Done),
            "done webtech" => Ok(PollOption::DoneWebtech),
            _ => Err(PollOptionParseError)
        }
    }
}

impl fmt::Display for PollOption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PollOption::NoWebtech => write!(f, "no webtech"),
            PollOption::NotStarted => write!(f, "not started"),
            PollOption::Started => write!(f, "started"),
            PollOption::Done => write!(f, "done"),
            PollOption::DoneWebtech => write!(f, "done webtech"),
        }
    }
}

/// The response body of `GET /poll-stats`: one counter per option.

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct PollStats {
    pub no_webtech: u32,
    pub not_started: u32,
    pub started: u32,
    pub done: u32,
    pub done_webtech: u32,
}

impl PollStats {
    pub fn count(&self, option: PollOption) -> u32 {
        match option {
            PollOption::NoWebtech => self.no_webtech,
            PollOption::NotStarted => self.not_started,
            PollOption::Started => self.started,
            PollOption::Done => self.done,
            PollOption::DoneWebtech => self.done_webtech,
        }
    }

    pub fn total(&self) -> u32 {
        PollOption::ALL.iter().map(|o| self.count(*o)).sum()
    }

    /// Counts paired with their options, in [`PollOption::ALL`] order.
    pub fn breakdown(&self) -> Vec<(PollOption, u32)> {
        PollOption::ALL.iter().map(|o| (*o, self.count(*o))).collect()
    }
}

/// The response body of `POST /poll`. The id is an opaque string assigned
/// by the server and is only ever sent back verbatim in the request path.

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct VoteReceipt {
    pub id: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum UpdateStatus {
    #[serde(rename = "ok")]
    Ok,
    #[serde(rename = "err")]
    Err,
}

/// The response body of `PUT /poll/{id}`. A status of `err` means the
/// server no longer knows the id we hold.

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct UpdateReceipt {
    pub status: UpdateStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_display_round_trips() {
        for option in PollOption::ALL {
            let parsed: PollOption = option.to_string().parse().unwrap_or_else(|_| {
                panic!("'{}' did not parse back", option)
            });
            assert_eq!(parsed, option);
        }
    }

    #[test]
    fn option_parse_is_case_insensitive() {
        assert!(matches!("Not Started".parse(), Ok(PollOption::NotStarted)));
        assert!(matches!("DONE".parse(), Ok(PollOption::Done)));
        assert!("finished".parse::<PollOption>().is_err());
    }

    #[test]
    fn option_serializes_as_variant_name() {
        let body = serde_json::to_string(&PollOption::NoWebtech).unwrap();
        assert_eq!(body, "\"NoWebtech\"");
        let echoed: PollOption = serde_json::from_str("\"DoneWebtech\"").unwrap();
        assert_eq!(echoed, PollOption::DoneWebtech);
    }

    #[test]
    fn stats_deserialize_from_wire_shape() {
        let stats: PollStats = serde_json::from_str(
            r#"{"no_webtech":1,"not_started":4,"started":2,"done":0,"done_webtech":3}"#,
        ).unwrap();
        assert_eq!(stats.total(), 10);
        assert_eq!(stats.count(PollOption::NotStarted), 4);
    }

    #[test]
    fn breakdown_covers_every_option_in_order() {
        let stats = PollStats { started: 2, done: 5, ..PollStats::default() };
        let breakdown = stats.breakdown();
        assert_eq!(breakdown.len(), PollOption::ALL.len());
        let options: Vec<PollOption> = breakdown.iter().map(|(o, _)| *o).collect();
        assert_eq!(options, PollOption::ALL);
        assert_eq!(breakdown.iter().map(|(_, c)| c).sum::<u32>(), stats.total());
    }

    #[test]
    fn receipts_match_backend_json() {
        let receipt: VoteReceipt = serde_json::from_str(r#"{"id":"3"}"#).unwrap();
        assert_eq!(receipt.id, "3");

        let ok: UpdateReceipt = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert_eq!(ok.status, UpdateStatus::Ok);
        let err: UpdateReceipt = serde_json::from_str(r#"{"status":"err"}"#).unwrap();
        assert_eq!(err.status, UpdateStatus::Err);
    }
}
