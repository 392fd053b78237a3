/// Whether a stockpile holding `available` units can pay `cost`.
pub fn can_afford(cost: u64, available: u64) -> bool {
    available >= cost
}
