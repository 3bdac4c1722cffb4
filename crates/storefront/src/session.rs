//! Session state: view modes and the seller journey.
//!
//! The view is a single tagged union of mutually exclusive modes, and the
//! buyer-to-seller journey is an explicit state machine with typed
//! transitions, so impossible combinations (e.g. a registration form shown
//! to an active seller) cannot be represented.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use ecuruza_core::{Shop, ShopId, SubscriptionPlan, SubscriptionStatus, UserId};

/// Which screen the host should render. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    BuyerBrowse,
    BuyerWishlist,
    SellerRegistration,
    SellerSubscription,
    SellerDashboard,
    Admin,
}

/// The account's position in the marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "role")]
pub enum Role {
    /// Browsing and buying only.
    #[default]
    Buyer,
    /// Asked to sell but has no shop yet.
    PendingShopRegistration,
    /// Shop registered, subscription plan not chosen.
    PendingSubscription { shop: Shop },
    /// Registered and entitled (or lapsed) seller.
    ActiveSeller { shop: Shop },
    /// Platform administrator.
    Admin,
}

/// A transition that is not legal from the current role.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid transition: cannot {action} while {state}")]
pub struct TransitionError {
    pub action: &'static str,
    pub state: &'static str,
}

/// Shop registration form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopRegistration {
    pub name: String,
    pub description: String,
    pub address: String,
    pub contact: String,
}

/// One user session: current view plus seller-journey state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    view: ViewMode,
    role: Role,
    /// Shop retained across `stop_selling` so a returning seller skips
    /// registration.
    registered_shop: Option<Shop>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn view(&self) -> ViewMode {
        self.view
    }

    #[must_use]
    pub const fn role(&self) -> &Role {
        &self.role
    }

    /// Switch between the browse and wishlist buyer screens.
    ///
    /// # Errors
    ///
    /// Fails unless the session is in a buyer view.
    pub fn set_buyer_view(&mut self, view: ViewMode) -> Result<(), TransitionError> {
        if !matches!(self.view, ViewMode::BuyerBrowse | ViewMode::BuyerWishlist) {
            return Err(self.invalid("switch buyer view"));
        }
        if !matches!(view, ViewMode::BuyerBrowse | ViewMode::BuyerWishlist) {
            return Err(self.invalid("switch to a non-buyer view"));
        }
        self.view = view;
        Ok(())
    }

    /// Enter the seller flow.
    ///
    /// A first-time seller lands on registration; a returning seller with a
    /// registered shop goes straight to subscription or the dashboard
    /// depending on entitlement.
    ///
    /// # Errors
    ///
    /// Fails unless the session is currently a buyer.
    pub fn start_selling(&mut self, owner_id: &UserId) -> Result<(), TransitionError> {
        if self.role != Role::Buyer {
            return Err(self.invalid("start selling"));
        }
        match self.registered_shop.take() {
            Some(shop) if shop.owner_id == *owner_id => self.enter_with_shop(shop),
            _ => {
                self.role = Role::PendingShopRegistration;
                self.view = ViewMode::SellerRegistration;
            }
        }
        Ok(())
    }

    /// Register a new shop; verification happens after subscription, so
    /// the shop starts unverified with no plan. The shop is readable from
    /// [`Self::role`] afterwards.
    ///
    /// # Errors
    ///
    /// Fails unless a registration is pending.
    pub fn register_shop(
        &mut self,
        id: ShopId,
        owner_id: UserId,
        form: ShopRegistration,
    ) -> Result<(), TransitionError> {
        if self.role != Role::PendingShopRegistration {
            return Err(self.invalid("register a shop"));
        }
        let shop = Shop {
            id,
            name: form.name,
            description: form.description,
            address: form.address,
            contact: form.contact,
            is_verified: false,
            owner_id,
            subscription: SubscriptionStatus::None,
        };
        self.role = Role::PendingSubscription { shop };
        self.view = ViewMode::SellerSubscription;
        Ok(())
    }

    /// Choose a subscription plan and enter the dashboard.
    ///
    /// # Errors
    ///
    /// Fails unless a subscription choice is pending.
    pub fn subscribe(&mut self, plan: SubscriptionPlan) -> Result<(), TransitionError> {
        let Role::PendingSubscription { shop } = &mut self.role else {
            return Err(self.invalid("subscribe"));
        };
        let mut shop = shop.clone();
        shop.subscription = plan.initial_status();
        self.role = Role::ActiveSeller { shop };
        self.view = ViewMode::SellerDashboard;
        Ok(())
    }

    /// Leave the seller flow and return to buying.
    ///
    /// A registered shop is retained for the next `start_selling`.
    ///
    /// # Errors
    ///
    /// Fails if the session is not in the seller flow.
    pub fn stop_selling(&mut self) -> Result<(), TransitionError> {
        match std::mem::take(&mut self.role) {
            Role::ActiveSeller { shop } | Role::PendingSubscription { shop } => {
                self.registered_shop = Some(shop);
            }
            Role::PendingShopRegistration => {}
            role @ (Role::Buyer | Role::Admin) => {
                self.role = role;
                return Err(self.invalid("stop selling"));
            }
        }
        self.role = Role::Buyer;
        self.view = ViewMode::BuyerBrowse;
        Ok(())
    }

    /// Enter the admin panel.
    ///
    /// # Errors
    ///
    /// Fails when the session is mid seller-onboarding.
    pub fn enter_admin(&mut self) -> Result<(), TransitionError> {
        if !matches!(self.role, Role::Buyer | Role::Admin) {
            return Err(self.invalid("enter admin"));
        }
        self.role = Role::Admin;
        self.view = ViewMode::Admin;
        Ok(())
    }

    /// Leave the admin panel.
    ///
    /// # Errors
    ///
    /// Fails unless the session is an admin.
    pub fn leave_admin(&mut self) -> Result<(), TransitionError> {
        if self.role != Role::Admin {
            return Err(self.invalid("leave admin"));
        }
        self.role = Role::Buyer;
        self.view = ViewMode::BuyerBrowse;
        Ok(())
    }

    fn enter_with_shop(&mut self, shop: Shop) {
        if shop.subscription.is_entitled() {
            self.role = Role::ActiveSeller { shop };
            self.view = ViewMode::SellerDashboard;
        } else {
            self.role = Role::PendingSubscription { shop };
            self.view = ViewMode::SellerSubscription;
        }
    }

    const fn state_name(&self) -> &'static str {
        match self.role {
            Role::Buyer => "a buyer",
            Role::PendingShopRegistration => "registering a shop",
            Role::PendingSubscription { .. } => "choosing a plan",
            Role::ActiveSeller { .. } => "an active seller",
            Role::Admin => "an admin",
        }
    }

    const fn invalid(&self, action: &'static str) -> TransitionError {
        TransitionError {
            action,
            state: self.state_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ShopRegistration {
        ShopRegistration {
            name: "Kigali Crafts".to_owned(),
            description: "Handmade local crafts".to_owned(),
            address: "123 KG Ave, Kigali".to_owned(),
            contact: "+250780000001".to_owned(),
        }
    }

    fn registered(session: &mut Session) {
        session.start_selling(&UserId::new("u1")).expect("start");
        session
            .register_shop(ShopId::new("s1"), UserId::new("u1"), form())
            .expect("register");
    }

    #[test]
    fn test_default_is_buyer_browse() {
        let session = Session::new();
        assert_eq!(session.view(), ViewMode::BuyerBrowse);
        assert_eq!(*session.role(), Role::Buyer);
    }

    #[test]
    fn test_first_time_seller_goes_through_registration() {
        let mut session = Session::new();
        session.start_selling(&UserId::new("u1")).expect("start");
        assert_eq!(session.view(), ViewMode::SellerRegistration);

        session
            .register_shop(ShopId::new("s1"), UserId::new("u1"), form())
            .expect("register");
        assert!(matches!(session.role(), Role::PendingSubscription { shop }
            if !shop.is_verified && shop.subscription == SubscriptionStatus::None));
        assert_eq!(session.view(), ViewMode::SellerSubscription);

        session.subscribe(SubscriptionPlan::Trial).expect("plan");
        assert_eq!(session.view(), ViewMode::SellerDashboard);
        assert!(matches!(session.role(), Role::ActiveSeller { shop }
            if shop.subscription == SubscriptionStatus::Trial));
    }

    #[test]
    fn test_monthly_plan_activates_immediately() {
        let mut session = Session::new();
        registered(&mut session);
        session.subscribe(SubscriptionPlan::Monthly).expect("plan");
        assert!(matches!(session.role(), Role::ActiveSeller { shop }
            if shop.subscription == SubscriptionStatus::Active));
    }

    #[test]
    fn test_returning_seller_skips_registration() {
        let mut session = Session::new();
        registered(&mut session);
        session.subscribe(SubscriptionPlan::Trial).expect("plan");
        session.stop_selling().expect("stop");
        assert_eq!(session.view(), ViewMode::BuyerBrowse);

        session.start_selling(&UserId::new("u1")).expect("restart");
        assert_eq!(session.view(), ViewMode::SellerDashboard);
    }

    #[test]
    fn test_unsubscribed_returning_seller_lands_on_plans() {
        let mut session = Session::new();
        registered(&mut session);
        session.stop_selling().expect("stop");

        session.start_selling(&UserId::new("u1")).expect("restart");
        assert_eq!(session.view(), ViewMode::SellerSubscription);
    }

    #[test]
    fn test_invalid_transitions_rejected() {
        let mut session = Session::new();

        assert!(session.subscribe(SubscriptionPlan::Trial).is_err());
        assert!(
            session
                .register_shop(ShopId::new("s1"), UserId::new("u1"), form())
                .is_err()
        );
        assert!(session.stop_selling().is_err());
        assert!(session.leave_admin().is_err());

        registered(&mut session);
        assert!(session.start_selling(&UserId::new("u1")).is_err());
        assert!(session.enter_admin().is_err());
    }

    #[test]
    fn test_buyer_view_switching() {
        let mut session = Session::new();
        session.set_buyer_view(ViewMode::BuyerWishlist).expect("switch");
        assert_eq!(session.view(), ViewMode::BuyerWishlist);
        session.set_buyer_view(ViewMode::BuyerBrowse).expect("switch");

        assert!(session.set_buyer_view(ViewMode::Admin).is_err());

        session.start_selling(&UserId::new("u1")).expect("start");
        assert!(session.set_buyer_view(ViewMode::BuyerBrowse).is_err());
    }

    #[test]
    fn test_admin_round_trip() {
        let mut session = Session::new();
        session.enter_admin().expect("enter");
        assert_eq!(session.view(), ViewMode::Admin);
        assert_eq!(*session.role(), Role::Admin);
        session.leave_admin().expect("leave");
        assert_eq!(*session.role(), Role::Buyer);
    }
}
