use super::ReviewerInfoStatus;

/// Compare two rosters entry by entry on name, team, type and status.
///
/// Both lists must already be in the same order; nothing is sorted here.
/// Email is not compared because a rendered table does not carry it.
pub fn roster_equals(a: &[ReviewerInfoStatus], b: &[ReviewerInfoStatus]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).all(|(l, r)| {
        l.info.name == r.info.name
            && l.info.team == r.info.team
            && l.info.reviewer_type == r.info.reviewer_type
            && l.status == r.status
    })
}
