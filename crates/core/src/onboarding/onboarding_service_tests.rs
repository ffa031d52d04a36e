#[cfg(test)]
mod tests {
    use crate::auth::{Session, SessionProvider};
    use crate::errors::{Error, Result};
    use crate::onboarding::{OnboardingStore, TOTAL_ONBOARDING_STEPS};
    use crate::profiles::{NewProfile, Profile, ProfileUpdate, ProfilesApi};
    use crate::tax::{FopGroup, FopSettings, FopSettingsUpdate, KvedActivity, TaxSettingsApi};
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};

    // --- Mock ProfilesApi ---

    #[derive(Default)]
    struct MockProfilesApi {
        updates: Mutex<Vec<ProfileUpdate>>,
    }

    #[async_trait]
    impl ProfilesApi for MockProfilesApi {
        async fn get_profile(&self, _user_id: &str) -> Result<Profile> {
            unimplemented!()
        }

        async fn create_profile(&self, _new_profile: &NewProfile) -> Result<Profile> {
            unimplemented!()
        }

        async fn update_profile(&self, user_id: &str, update: &ProfileUpdate) -> Result<Profile> {
            self.updates.lock().unwrap().push(update.clone());
            Ok(Profile {
                id: user_id.to_string(),
                is_fop: update.is_fop.unwrap_or(true),
                full_name: None,
            })
        }

        async fn delete_profile(&self, _user_id: &str) -> Result<()> {
            unimplemented!()
        }
    }

    // --- Mock TaxSettingsApi ---

    #[derive(Default)]
    struct MockTaxSettingsApi {
        updates: Mutex<Vec<FopSettingsUpdate>>,
    }

    #[async_trait]
    impl TaxSettingsApi for MockTaxSettingsApi {
        async fn get_settings(&self, _user_id: &str) -> Result<FopSettings> {
            unimplemented!()
        }

        async fn update_settings(
            &self,
            _user_id: &str,
            update: &FopSettingsUpdate,
        ) -> Result<FopSettings> {
            self.updates.lock().unwrap().push(update.clone());
            Ok(FopSettings {
                fop_group: update.fop_group.unwrap_or(FopGroup::Three),
                is_zed: update.is_zed.unwrap_or(false),
                income_tax_percent: update.income_tax_percent,
                military_tax_percent: update.military_tax_percent,
                esv_value: update.esv_value,
                is_vat_payer: false,
                has_employees: false,
                employees_count: 0,
            })
        }
    }

    // --- Mock SessionProvider ---

    struct MockSessionProvider {
        session: Option<Session>,
    }

    #[async_trait]
    impl SessionProvider for MockSessionProvider {
        async fn get_session(&self) -> Result<Option<Session>> {
            Ok(self.session.clone())
        }
    }

    fn store(
        profiles: Arc<MockProfilesApi>,
        settings: Arc<MockTaxSettingsApi>,
        signed_in: bool,
    ) -> OnboardingStore {
        let session = signed_in.then(|| Session {
            user_id: "user-1".to_string(),
            email: None,
            access_token: "token".to_string(),
        });
        OnboardingStore::new(profiles, settings, Arc::new(MockSessionProvider { session }))
    }

    #[test]
    fn steps_are_bounded() {
        let mut s = store(Arc::default(), Arc::default(), true);
        assert_eq!(s.current_step, 1);
        s.prev_step();
        assert_eq!(s.current_step, 1);
        for _ in 0..10 {
            s.next_step();
        }
        assert_eq!(s.current_step, TOTAL_ONBOARDING_STEPS);
        s.prev_step();
        assert_eq!(s.current_step, TOTAL_ONBOARDING_STEPS - 1);
    }

    #[test]
    fn recommendation_follows_the_answers() {
        let mut s = store(Arc::default(), Arc::default(), true);

        s.answers.annual_income = Some(dec!(100_000));
        s.answers.employees_count = 2;
        s.calculate_recommendation();
        assert_eq!(s.answers.recommended_group, FopGroup::Two);

        s.answers.selected_kveds = vec![KvedActivity {
            code: "64.19".to_string(),
            name: "Інші види грошового посередництва".to_string(),
            allowed_groups: vec![FopGroup::Three],
        }];
        s.calculate_recommendation();
        assert_eq!(s.answers.recommended_group, FopGroup::Three);

        s.answers.selected_kveds.clear();
        s.answers.has_zed = true;
        s.calculate_recommendation();
        assert_eq!(s.answers.recommended_group, FopGroup::Three);
    }

    #[tokio::test]
    async fn submit_without_session_fails_and_resets_loading() {
        let mut s = store(Arc::default(), Arc::default(), false);
        let result = s.submit().await;
        assert!(matches!(result, Err(Error::Auth(_))));
        assert!(!s.is_loading);
    }

    #[tokio::test]
    async fn submit_patches_profile_then_settings_for_fop() {
        let profiles = Arc::new(MockProfilesApi::default());
        let settings = Arc::new(MockTaxSettingsApi::default());
        let mut s = store(profiles.clone(), settings.clone(), true);

        s.answers.has_zed = true;
        s.calculate_recommendation();
        s.submit().await.unwrap();

        let profile_updates = profiles.updates.lock().unwrap();
        assert_eq!(profile_updates.len(), 1);
        assert_eq!(profile_updates[0].is_fop, Some(true));

        let settings_updates = settings.updates.lock().unwrap();
        assert_eq!(settings_updates.len(), 1);
        let update = &settings_updates[0];
        assert_eq!(update.fop_group, Some(FopGroup::Three));
        assert_eq!(update.is_zed, Some(true));
        assert_eq!(update.income_tax_percent, Some(dec!(5.0)));
        assert_eq!(update.military_tax_percent, Some(dec!(1.5)));
        assert_eq!(update.esv_value, Some(dec!(1760.0)));
    }

    #[tokio::test]
    async fn group_two_gets_zero_income_tax_percent() {
        let settings = Arc::new(MockTaxSettingsApi::default());
        let mut s = store(Arc::default(), settings.clone(), true);

        s.answers.annual_income = Some(dec!(100_000));
        s.calculate_recommendation();
        assert_eq!(s.answers.recommended_group, FopGroup::Two);
        s.submit().await.unwrap();

        let updates = settings.updates.lock().unwrap();
        assert_eq!(updates[0].income_tax_percent, Some(dec!(0)));
    }

    #[tokio::test]
    async fn non_fop_skips_tax_settings() {
        let profiles = Arc::new(MockProfilesApi::default());
        let settings = Arc::new(MockTaxSettingsApi::default());
        let mut s = store(profiles.clone(), settings.clone(), true);

        s.answers.is_fop = false;
        s.submit().await.unwrap();

        assert_eq!(profiles.updates.lock().unwrap().len(), 1);
        assert!(settings.updates.lock().unwrap().is_empty());
    }
}
