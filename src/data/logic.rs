use crate::data::data_item::DataItem;

/// Column names of the logic-gate targets, in output order.
pub const GATE_NAMES: [&str; 6] = ["XOR", "XNOR", "OR", "AND", "NOR", "NAND"];

pub fn xor(a: u8, b: u8) -> u8 { a ^ b }
pub fn xnor(a: u8, b: u8) -> u8 { 1 - xor(a, b) }
pub fn or(a: u8, b: u8) -> u8 { a | b }
pub fn and(a: u8, b: u8) -> u8 { a & b }
pub fn nor(a: u8, b: u8) -> u8 { 1 - or(a, b) }
pub fn nand(a: u8, b: u8) -> u8 { 1 - and(a, b) }

/// The four two-bit inputs `{0,0} {0,1} {1,0} {1,1}`, each paired with
/// `(XOR, XNOR, OR, AND, NOR, NAND)`.
pub fn logic_gate_table() -> Vec<DataItem> {
    let mut items = Vec::with_capacity(4);
    for a in 0..=1u8 {
        for b in 0..=1u8 {
            let target = [xor(a, b), xnor(a, b), or(a, b), and(a, b), nor(a, b), nand(a, b)]
                .iter()
                .map(|&bit| bit as f64)
                .collect();
            items.push(DataItem::new(vec![a as f64, b as f64], target));
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::logic_gate_table;

    #[test]
    fn table_has_expected_rows() {
        let table = logic_gate_table();
        let rows: Vec<(Vec<f64>, Vec<f64>)> = table.into_iter().map(|d| (d.input, d.target)).collect();
        assert_eq!(rows, vec![
            (vec![0.0, 0.0], vec![0.0, 1.0, 0.0, 0.0, 1.0, 1.0]),
            (vec![0.0, 1.0], vec![1.0, 0.0, 1.0, 0.0, 0.0, 1.0]),
            (vec![1.0, 0.0], vec![1.0, 0.0, 1.0, 0.0, 0.0, 1.0]),
            (vec![1.0, 1.0], vec![0.0, 1.0, 1.0, 1.0, 0.0, 0.0]),
        ]);
    }

    #[test]
    fn complementary_gates_sum_to_one() {
        for item in logic_gate_table() {
            let t = &item.target;
            assert_eq!(t[0] + t[1], 1.0);
            assert_eq!(t[2] + t[4], 1.0);
            assert_eq!(t[3] + t[5], 1.0);
        }
    }
}
