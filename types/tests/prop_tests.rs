use proptest::prelude::*;

use xrpl_types::{
    AccountRootFlags, Address, Hash256, LedgerIndex, OfferCreateFlags, PaymentFlags,
    TransactionFlags, TrustSetFlags, XrpCurrencyAmount,
};

proptest! {
    /// Any account id encodes to an address that parses back to the same id.
    #[test]
    fn address_account_id_roundtrip(id in prop::array::uniform20(0u8..)) {
        let addr = Address::from_account_id(id);
        prop_assert!(addr.as_str().starts_with('r'));
        let parsed = Address::of(addr.as_str()).unwrap();
        prop_assert_eq!(parsed.account_id(), &id);
    }

    /// Changing one character of a valid address never yields a valid address
    /// for a different account.
    #[test]
    fn address_single_char_corruption_detected(
        id in prop::array::uniform20(0u8..),
        pos in 1usize..25,
        replacement in prop::sample::select(b"rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz".to_vec()),
    ) {
        let addr = Address::from_account_id(id);
        let mut text = addr.as_str().as_bytes().to_vec();
        let pos = pos % text.len();
        prop_assume!(pos > 0 && text[pos] != replacement);
        text[pos] = replacement;
        let corrupted = String::from_utf8(text).unwrap();
        if let Ok(parsed) = Address::of(&corrupted) {
            prop_assert_eq!(parsed.account_id(), &id);
        }
    }

    /// Hash text form is uppercase and parses back.
    #[test]
    fn hash_text_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let hash = Hash256::new(bytes);
        let text = hash.to_string();
        prop_assert_eq!(text.len(), 64);
        prop_assert_eq!(text.to_uppercase(), text.clone());
        prop_assert_eq!(Hash256::of(&text).unwrap(), hash);
        prop_assert_eq!(hash.is_zero(), bytes == [0u8; 32]);
    }

    /// Drop amounts travel as decimal strings and decode from either form.
    #[test]
    fn drops_wire_roundtrip(drops in any::<u64>()) {
        let amount = XrpCurrencyAmount::of_drops(drops);
        let json = serde_json::to_value(amount).unwrap();
        prop_assert_eq!(&json, &serde_json::Value::String(drops.to_string()));
        let decoded: XrpCurrencyAmount = serde_json::from_value(json).unwrap();
        prop_assert_eq!(decoded, amount);
        let decoded: XrpCurrencyAmount = serde_json::from_value(serde_json::json!(drops)).unwrap();
        prop_assert_eq!(decoded, amount);
    }

    /// Whole-XRP text converts exactly and back.
    #[test]
    fn xrp_string_roundtrip(drops in 0u64..=100_000_000_000_000_000) {
        let amount = XrpCurrencyAmount::of_drops(drops);
        let text = amount.to_xrp_string();
        prop_assert_eq!(XrpCurrencyAmount::of_xrp_str(&text).unwrap(), amount);
    }

    /// Checked arithmetic agrees with u64 checked arithmetic.
    #[test]
    fn drop_arithmetic_matches_u64(a in any::<u64>(), b in any::<u64>()) {
        let x = XrpCurrencyAmount::of_drops(a);
        prop_assert_eq!(x.checked_add(b).ok().map(|v| v.drops()), a.checked_add(b));
        prop_assert_eq!(x.checked_sub(b).ok().map(|v| v.drops()), a.checked_sub(b));
    }

    /// Sequence ledger indices encode as numbers and decode from numbers or text.
    #[test]
    fn ledger_index_wire_roundtrip(seq in any::<u32>()) {
        let index = LedgerIndex::Sequence(seq);
        let json = serde_json::to_value(index).unwrap();
        prop_assert_eq!(&json, &serde_json::json!(seq));
        prop_assert_eq!(serde_json::from_value::<LedgerIndex>(json).unwrap(), index);
        prop_assert_eq!(LedgerIndex::of(&seq.to_string()).unwrap(), index);
    }

    /// Ledger flag masks reproduce any raw value.
    #[test]
    fn ledger_flags_preserve_bits(raw in any::<u32>()) {
        prop_assert_eq!(AccountRootFlags::from_bits(raw).bits(), raw);
    }

    /// Transaction masks keep every bit but always carry the canonical-signature bit.
    #[test]
    fn transaction_flags_always_canonical(raw in any::<u32>()) {
        prop_assert_eq!(TransactionFlags::from_bits(raw).bits(), raw | 0x8000_0000);
        prop_assert_eq!(PaymentFlags::from_bits(raw).bits(), raw | 0x8000_0000);
        prop_assert_eq!(TrustSetFlags::from_bits(raw).bits(), raw | 0x8000_0000);
    }

    /// Unknown bits are reported exactly.
    #[test]
    fn unknown_bits_are_outside_known(raw in any::<u32>()) {
        let flags = OfferCreateFlags::from_bits(raw);
        prop_assert_eq!(flags.unknown_bits() & OfferCreateFlags::KNOWN, 0);
        prop_assert_eq!(
            flags.unknown_bits() | (raw & OfferCreateFlags::KNOWN),
            raw & !0x8000_0000
        );
    }

    /// Mask wire encoding round-trips through JSON.
    #[test]
    fn flags_json_roundtrip(raw in any::<u32>()) {
        let flags = TrustSetFlags::from_bits(raw);
        let json = serde_json::to_value(flags).unwrap();
        prop_assert_eq!(serde_json::from_value::<TrustSetFlags>(json).unwrap(), flags);
    }
}
