use crate::domain::FrequencyMap;

/// Returns every cookie tied for the highest count, in map iteration order.
///
/// An empty map yields an empty list.
pub fn select_max(freqs: &FrequencyMap) -> Vec<String> {
    let mut max_count = 0;
    let mut winners = Vec::new();

    for (cookie, &count) in freqs {
        if count > max_count {
            max_count = count;
            winners.clear();
            winners.push(cookie.clone());
        } else if count == max_count {
            winners.push(cookie.clone());
        }
    }

    winners
}
