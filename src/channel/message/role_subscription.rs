use crate::id::{marker::RoleSubscriptionSkuMarker, Id};
use serde::{Deserialize, Serialize};

/// Details of a role subscription purchase or renewal.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct RoleSubscriptionData {
    pub is_renewal: bool,
    /// SKU ID of the subscription listing.
    pub role_subscription_listing_id: Id<RoleSubscriptionSkuMarker>,
    pub tier_name: String,
    /// Cumulative number of months the user has been subscribed.
    pub total_months_subscribed: u16,
}

#[cfg(test)]
mod tests {
    use super::RoleSubscriptionData;
    use crate::id::Id;
    use serde_test::Token;

    #[test]
    fn role_subscription_data() {
        let value = RoleSubscriptionData {
            is_renewal: true,
            role_subscription_listing_id: Id::new(1),
            tier_name: "gold".to_owned(),
            total_months_subscribed: 4,
        };

        serde_test::assert_tokens(
            &value,
            &[
                Token::Struct {
                    name: "RoleSubscriptionData",
                    len: 4,
                },
                Token::Str("is_renewal"),
                Token::Bool(true),
                Token::Str("role_subscription_listing_id"),
                Token::Str("1"),
                Token::Str("tier_name"),
                Token::Str("gold"),
                Token::Str("total_months_subscribed"),
                Token::U16(4),
                Token::StructEnd,
            ],
        );
    }
}
