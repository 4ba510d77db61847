//! Detection of occupancy and swap conflicts between agent paths.

use std::fmt;

use mapf_core::{AgentId, Cell, Step};
use mapf_search::Path;

// ── Conflict ──────────────────────────────────────────────────────────────────

/// What went wrong between two agents at a step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConflictKind {
    /// Both agents occupy `cell` at the conflict step.
    Vertex(Cell),
    /// The agents exchange cells between the previous step and the conflict
    /// step (head-on crossing).  `from`/`to` are from agent `a`'s
    /// perspective; agent `b` moves `to -> from`.
    Swap { from: Cell, to: Cell },
}

/// The earliest clash between a pair of agents.
///
/// `a < b` always holds (pairs are scanned in index order), and the
/// coordinator resolves a conflict by constraining agent `a`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conflict {
    pub a:    AgentId,
    pub b:    AgentId,
    pub step: Step,
    pub kind: ConflictKind,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ConflictKind::Vertex(cell) => {
                write!(f, "{} and {} both at {} at {}", self.a, self.b, cell, self.step)
            }
            ConflictKind::Swap { from, to } => write!(
                f,
                "{} and {} swap {}<->{} at {}",
                self.a, self.b, from, to, self.step
            ),
        }
    }
}

// ── Detector ──────────────────────────────────────────────────────────────────

/// Find the earliest conflict among `paths`, scanning steps from 0 upward
/// and agent pairs `(i, j)` with `i < j` in index order within each step.
///
/// Agents whose path has ended are treated as holding at their final cell,
/// so a finished agent parked on another agent's route still conflicts.
/// At the same `(step, pair)` a vertex conflict is reported in preference
/// to a swap.  Returns `None` if the paths are jointly conflict-free.
pub fn first_conflict(paths: &[Path]) -> Option<Conflict> {
    let horizon = paths.iter().map(Path::len).max().unwrap_or(0);

    for t in 0..horizon as u64 {
        let step = Step(t);
        for i in 0..paths.len() {
            for j in (i + 1)..paths.len() {
                let here_i = paths[i].position_at(step);
                let here_j = paths[j].position_at(step);

                if here_i == here_j {
                    return Some(Conflict {
                        a:    AgentId(i as u32),
                        b:    AgentId(j as u32),
                        step,
                        kind: ConflictKind::Vertex(here_i),
                    });
                }

                if t > 0 {
                    let prev = Step(t - 1);
                    let prev_i = paths[i].position_at(prev);
                    let prev_j = paths[j].position_at(prev);
                    if here_i == prev_j && here_j == prev_i {
                        return Some(Conflict {
                            a:    AgentId(i as u32),
                            b:    AgentId(j as u32),
                            step,
                            kind: ConflictKind::Swap { from: prev_i, to: here_i },
                        });
                    }
                }
            }
        }
    }
    None
}
