//! Money sources: the wallet and linked bank cards.

use std::fmt;

/// Something a payment can be funded from.
pub trait PaymentSource {
    /// Server-assigned identifier of the source, if one was reported.
    fn id(&self) -> Option<&str>;
}

/// Card brand, with the brand-specific security code conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardType {
    /// VISA.
    Visa,
    /// MasterCard.
    MasterCard,
    /// American Express.
    AmericanExpress,
    /// JCB.
    Jcb,
    /// Any brand this client does not know about.
    #[default]
    Unknown,
}

impl CardType {
    const KNOWN: [Self; 4] = [Self::Visa, Self::MasterCard, Self::AmericanExpress, Self::Jcb];

    /// Brand name as it appears on the wire.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Visa => "VISA",
            Self::MasterCard => "MasterCard",
            Self::AmericanExpress => "AmericanExpress",
            Self::Jcb => "JCB",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Name of the security code printed on this brand (CVV2, CVC2, ...).
    #[must_use]
    pub fn csc_abbreviation(self) -> &'static str {
        match self {
            Self::Visa => "CVV2",
            Self::MasterCard => "CVC2",
            Self::AmericanExpress => "CID",
            Self::Jcb => "CAV2",
            Self::Unknown => "CSC",
        }
    }

    /// Number of digits in the security code.
    #[must_use]
    pub fn csc_length(self) -> usize {
        match self {
            Self::AmericanExpress | Self::Unknown => 4,
            Self::Visa | Self::MasterCard | Self::Jcb => 3,
        }
    }

    /// Parses a brand name case-insensitively.
    ///
    /// Absent or unrecognised names map to [`CardType::Unknown`].
    ///
    /// # Examples
    ///
    /// ```
    /// use money_api_client::model::CardType;
    ///
    /// assert_eq!(CardType::parse(Some("visa")), CardType::Visa);
    /// assert_eq!(CardType::parse(Some("Diners")), CardType::Unknown);
    /// assert_eq!(CardType::parse(None), CardType::Unknown);
    /// ```
    #[must_use]
    pub fn parse(name: Option<&str>) -> Self {
        name.and_then(|name| Self::KNOWN.into_iter().find(|t| t.name().eq_ignore_ascii_case(name)))
            .unwrap_or(Self::Unknown)
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A bank card linked to the account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Card identifier, used as a money source id.
    pub id: Option<String>,
    /// Masked card number, e.g. `"510000******0001"`.
    pub pan_fragment: Option<String>,
    /// Card brand.
    pub card_type: CardType,
}

impl PaymentSource for Card {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// The account's own wallet balance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Wallet {
    /// Wallet identifier.
    pub id: Option<String>,
}

impl PaymentSource for Wallet {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// A money source as it appears in responses: either the wallet or a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneySource {
    /// Pay from the wallet.
    Wallet(Wallet),
    /// Pay with a linked card.
    Card(Card),
}

impl PaymentSource for MoneySource {
    fn id(&self) -> Option<&str> {
        match self {
            Self::Wallet(wallet) => wallet.id(),
            Self::Card(card) => card.id(),
        }
    }
}

impl From<Card> for MoneySource {
    fn from(card: Card) -> Self {
        Self::Card(card)
    }
}

impl From<Wallet> for MoneySource {
    fn from(wallet: Wallet) -> Self {
        Self::Wallet(wallet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(CardType::parse(Some("MASTERCARD")), CardType::MasterCard);
        assert_eq!(CardType::parse(Some("jcb")), CardType::Jcb);
        assert_eq!(CardType::parse(Some("americanexpress")), CardType::AmericanExpress);
    }

    #[test]
    fn test_parse_unknown_falls_back() {
        assert_eq!(CardType::parse(Some("")), CardType::Unknown);
        assert_eq!(CardType::parse(Some("MIR")), CardType::Unknown);
    }

    #[test]
    fn test_csc_conventions() {
        assert_eq!(CardType::Visa.csc_abbreviation(), "CVV2");
        assert_eq!(CardType::Visa.csc_length(), 3);
        assert_eq!(CardType::AmericanExpress.csc_abbreviation(), "CID");
        assert_eq!(CardType::AmericanExpress.csc_length(), 4);
        assert_eq!(CardType::Unknown.csc_length(), 4);
    }

    #[test]
    fn test_name_round_trips_through_parse() {
        for card_type in CardType::KNOWN {
            assert_eq!(CardType::parse(Some(card_type.name())), card_type);
        }
        assert_eq!(CardType::parse(Some(CardType::Unknown.name())), CardType::Unknown);
    }

    #[test]
    fn test_money_source_id() {
        let card = Card {
            id: Some("card-1".to_owned()),
            pan_fragment: None,
            card_type: CardType::Visa,
        };
        assert_eq!(MoneySource::from(card).id(), Some("card-1"));
        assert_eq!(MoneySource::from(Wallet::default()).id(), None);
    }
}
