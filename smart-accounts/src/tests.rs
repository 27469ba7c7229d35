// Copyright (c) 2024 Custos Association
// This file is part of Custos
//
// Custos is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Custos is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Custos.  If not, see <http://www.gnu.org/licenses/>.

use super::*;
use crate::mock::{
	new_test_ext, Balances, CustosTokens, RuntimeOrigin, SmartAccounts, System, TestRuntime,
	Timestamp,
};
use frame_support::{assert_noop, assert_ok, traits::Currency};
use rstest::*;
use sp_core::crypto::AccountId32;
use sp_runtime::DispatchError;
use test_utils::{helpers::events, AccountId, Sr25519Keyring, GENESIS_TIME, ONE_DAY, ONE_HOUR};

fn owner() -> AccountId {
	Sr25519Keyring::Bob.to_account_id()
}

fn guardians() -> Vec<AccountId> {
	vec![
		Sr25519Keyring::Charlie.to_account_id(),
		Sr25519Keyring::Dave.to_account_id(),
		Sr25519Keyring::Eve.to_account_id(),
	]
}

fn guardian(i: usize) -> AccountId {
	guardians()[i].clone()
}

fn new_owner() -> AccountId {
	Sr25519Keyring::Ferdie.to_account_id()
}

fn stranger() -> AccountId {
	Sr25519Keyring::One.to_account_id()
}

fn admin() -> AccountId {
	Sr25519Keyring::Alice.to_account_id()
}

fn create_default_account() -> AccountId {
	SmartAccounts::do_create_account(owner(), guardians(), 2, None, 0).unwrap()
}

fn advance_time(ms: u64) {
	Timestamp::set_timestamp(Timestamp::get() + ms);
}

fn transfer(to: AccountId, amount: Balance) -> AccountCallOf<TestRuntime> {
	AccountCall::Transfer { asset: Asset::Native, to, amount }
}

#[test]
fn create_account_works() {
	new_test_ext().execute_with(|| {
		let biometric = Some(H256::repeat_byte(7));
		assert_ok!(SmartAccounts::create_account(
			RuntimeOrigin::signed(admin()),
			owner(),
			guardians(),
			2,
			biometric,
			42
		));
		let account = SmartAccounts::derive_account_id(&owner(), &guardians(), 42);
		System::assert_last_event(
			Event::AccountCreated { account: account.clone(), owner: owner(), required_quorum: 2 }
				.into(),
		);
		let info = SmartAccounts::account_info(&account).unwrap();
		assert_eq!(info.owner, owner());
		assert_eq!(info.guardians, guardians());
		assert_eq!(info.quorum, 2);
		assert_eq!(info.nonce, 0);
		assert!(!info.locked);
		assert!(info.biometric_enabled);
		assert_eq!(SmartAccounts::account(&account).unwrap().created_at, GENESIS_TIME);
	});
}

#[test]
fn create_account_twice_fails_unless_salt_differs() {
	new_test_ext().execute_with(|| {
		create_default_account();
		assert_noop!(
			SmartAccounts::do_create_account(owner(), guardians(), 2, None, 0),
			Error::<TestRuntime>::DuplicateAccount
		);
		let other = SmartAccounts::do_create_account(owner(), guardians(), 2, None, 1).unwrap();
		assert_ne!(other, SmartAccounts::derive_account_id(&owner(), &guardians(), 0));
	});
}

#[rstest(
	who,
	guardian_set,
	quorum,
	expected,
	case::empty_owner(
		AccountId32::new([0u8; 32]),
		guardians(),
		2,
		Error::<TestRuntime>::InvalidOwner
	),
	case::too_many_guardians(
		owner(),
		(1u8..=11).map(|i| AccountId32::new([i; 32])).collect(),
		2,
		Error::<TestRuntime>::TooManyGuardians
	),
	case::owner_as_guardian(
		owner(),
		vec![guardian(0), owner()],
		1,
		Error::<TestRuntime>::GuardianIsOwner
	),
	case::duplicate_guardian(
		owner(),
		vec![guardian(0), guardian(0)],
		1,
		Error::<TestRuntime>::DuplicateGuardian
	),
	case::zero_quorum(owner(), guardians(), 0, Error::<TestRuntime>::InvalidQuorum),
	case::quorum_above_guardians(owner(), guardians(), 4, Error::<TestRuntime>::InvalidQuorum),
	case::no_guardians(owner(), vec![], 1, Error::<TestRuntime>::InvalidQuorum)
)]
fn create_account_validates_input(
	who: AccountId,
	guardian_set: Vec<AccountId>,
	quorum: u32,
	expected: Error<TestRuntime>,
) {
	new_test_ext().execute_with(|| {
		assert_noop!(
			SmartAccounts::create_account(
				RuntimeOrigin::signed(admin()),
				who,
				guardian_set,
				quorum,
				None,
				0
			),
			expected
		);
	});
}

#[test]
fn guardian_management_is_owner_only() {
	new_test_ext().execute_with(|| {
		let account = create_default_account();
		assert_noop!(
			SmartAccounts::add_guardian(
				RuntimeOrigin::signed(guardian(0)),
				account.clone(),
				stranger(),
			),
			Error::<TestRuntime>::NotOwner
		);
		assert_noop!(
			SmartAccounts::add_guardian(RuntimeOrigin::signed(owner()), stranger(), stranger()),
			Error::<TestRuntime>::AccountNotFound
		);
		assert_ok!(SmartAccounts::add_guardian(
			RuntimeOrigin::signed(owner()),
			account.clone(),
			stranger()
		));
		System::assert_last_event(
			Event::GuardianAdded { account: account.clone(), guardian: stranger() }.into(),
		);
		assert_eq!(SmartAccounts::account_info(&account).unwrap().guardians.len(), 4);
	});
}

#[test]
fn add_guardian_fails_for_existing_guardian_or_owner() {
	new_test_ext().execute_with(|| {
		let account = create_default_account();
		assert_noop!(
			SmartAccounts::add_guardian(
				RuntimeOrigin::signed(owner()),
				account.clone(),
				guardian(1),
			),
			Error::<TestRuntime>::AlreadyGuardian
		);
		assert_noop!(
			SmartAccounts::add_guardian(RuntimeOrigin::signed(owner()), account, owner()),
			Error::<TestRuntime>::GuardianIsOwner
		);
	});
}

#[test]
fn add_guardian_fails_when_limit_reached() {
	new_test_ext().execute_with(|| {
		let full: Vec<AccountId> = (1u8..=10).map(|i| AccountId32::new([i; 32])).collect();
		let account = SmartAccounts::do_create_account(owner(), full, 5, None, 0).unwrap();
		assert_noop!(
			SmartAccounts::add_guardian(RuntimeOrigin::signed(owner()), account, stranger()),
			Error::<TestRuntime>::GuardianLimitReached
		);
	});
}

#[test]
fn remove_guardian_keeps_quorum_reachable() {
	new_test_ext().execute_with(|| {
		let account = create_default_account();
		assert_noop!(
			SmartAccounts::remove_guardian(
				RuntimeOrigin::signed(owner()),
				account.clone(),
				stranger(),
			),
			Error::<TestRuntime>::NotAGuardian
		);
		assert_ok!(SmartAccounts::remove_guardian(
			RuntimeOrigin::signed(owner()),
			account.clone(),
			guardian(2)
		));
		assert_eq!(
			SmartAccounts::account_info(&account).unwrap().guardians,
			guardians()[..2].to_vec(),
		);
		assert_noop!(
			SmartAccounts::remove_guardian(RuntimeOrigin::signed(owner()), account, guardian(1)),
			Error::<TestRuntime>::InvalidQuorum
		);
	});
}

#[test]
fn owner_guardian_and_admin_can_lock() {
	new_test_ext().execute_with(|| {
		let account = create_default_account();
		for origin in [
			RuntimeOrigin::signed(owner()),
			RuntimeOrigin::signed(guardian(1)),
			RuntimeOrigin::signed(admin()),
			RuntimeOrigin::root(),
		] {
			assert_ok!(SmartAccounts::lock_account(origin, account.clone()));
			assert!(SmartAccounts::account_info(&account).unwrap().locked);
			assert_ok!(SmartAccounts::unlock_account(
				RuntimeOrigin::signed(owner()),
				account.clone(),
			));
		}
		assert_noop!(
			SmartAccounts::lock_account(RuntimeOrigin::signed(stranger()), account),
			Error::<TestRuntime>::NotAuthorized
		);
	});
}

#[test]
fn lock_is_idempotent() {
	new_test_ext().execute_with(|| {
		let account = create_default_account();
		assert_ok!(SmartAccounts::lock_account(
			RuntimeOrigin::signed(guardian(0)),
			account.clone(),
		));
		let locked_at = SmartAccounts::account(&account).unwrap().locked_at;
		assert_eq!(locked_at, Some(GENESIS_TIME));
		advance_time(ONE_HOUR);
		assert_ok!(SmartAccounts::lock_account(RuntimeOrigin::signed(owner()), account.clone()));
		assert_eq!(SmartAccounts::account(&account).unwrap().locked_at, locked_at);
	});
}

#[test]
fn locked_account_rejects_owner_mutations_but_accepts_unlock() {
	new_test_ext().execute_with(|| {
		let account = create_default_account();
		assert_ok!(SmartAccounts::lock_account(
			RuntimeOrigin::signed(guardian(0)),
			account.clone(),
		));
		assert_noop!(
			SmartAccounts::add_guardian(
				RuntimeOrigin::signed(owner()),
				account.clone(),
				stranger(),
			),
			Error::<TestRuntime>::AccountLocked
		);
		assert_noop!(
			SmartAccounts::create_session_key(
				RuntimeOrigin::signed(owner()),
				account.clone(),
				stranger(),
				ONE_HOUR
			),
			Error::<TestRuntime>::AccountLocked
		);
		assert_noop!(
			SmartAccounts::set_spending_limit(
				RuntimeOrigin::signed(owner()),
				account.clone(),
				Asset::Native,
				10
			),
			Error::<TestRuntime>::AccountLocked
		);
		assert_noop!(
			SmartAccounts::execute(
				RuntimeOrigin::signed(owner()),
				account.clone(),
				transfer(stranger(), 1)
			),
			Error::<TestRuntime>::AccountLocked
		);
		assert_noop!(
			SmartAccounts::unlock_account(RuntimeOrigin::signed(guardian(0)), account.clone()),
			Error::<TestRuntime>::NotOwner
		);
		assert_ok!(SmartAccounts::unlock_account(RuntimeOrigin::signed(owner()), account.clone()));
		System::assert_last_event(Event::AccountUnlocked { account: account.clone() }.into());
		assert_ok!(SmartAccounts::add_guardian(
			RuntimeOrigin::signed(owner()),
			account,
			stranger(),
		));
	});
}

#[test]
fn session_keys_expire() {
	new_test_ext().execute_with(|| {
		let account = create_default_account();
		let key = stranger();
		assert_ok!(SmartAccounts::create_session_key(
			RuntimeOrigin::signed(owner()),
			account.clone(),
			key.clone(),
			ONE_HOUR
		));
		System::assert_last_event(
			Event::SessionKeyCreated {
				account: account.clone(),
				key: key.clone(),
				expires_at: GENESIS_TIME + ONE_HOUR,
			}
			.into(),
		);
		assert!(SmartAccounts::is_valid_session_key(&account, &key));
		advance_time(ONE_HOUR - 1);
		assert!(SmartAccounts::is_valid_session_key(&account, &key));
		advance_time(1);
		assert!(!SmartAccounts::is_valid_session_key(&account, &key));
		assert!(SmartAccounts::session_keys(&account).is_empty());
	});
}

#[test]
fn session_key_duration_is_bounded() {
	new_test_ext().execute_with(|| {
		let account = create_default_account();
		assert_noop!(
			SmartAccounts::create_session_key(
				RuntimeOrigin::signed(owner()),
				account.clone(),
				stranger(),
				30 * ONE_DAY + 1
			),
			Error::<TestRuntime>::DurationTooLong
		);
		assert_noop!(
			SmartAccounts::create_session_key(
				RuntimeOrigin::signed(owner()),
				account.clone(),
				stranger(),
				0
			),
			Error::<TestRuntime>::ZeroDuration
		);
		assert_ok!(SmartAccounts::create_session_key(
			RuntimeOrigin::signed(owner()),
			account,
			stranger(),
			30 * ONE_DAY
		));
	});
}

#[test]
fn expired_session_keys_free_their_slot() {
	new_test_ext().execute_with(|| {
		let account = create_default_account();
		for i in 1u8..=3 {
			assert_ok!(SmartAccounts::do_create_session_key(
				&account,
				AccountId32::new([i; 32]),
				ONE_HOUR
			));
		}
		assert_noop!(
			SmartAccounts::do_create_session_key(&account, AccountId32::new([4; 32]), ONE_HOUR),
			Error::<TestRuntime>::TooManySessionKeys
		);
		advance_time(ONE_HOUR);
		assert_ok!(SmartAccounts::do_create_session_key(
			&account,
			AccountId32::new([4; 32]),
			ONE_HOUR,
		));
		assert_eq!(SmartAccounts::session_keys(&account).len(), 1);
	});
}

#[test]
fn revoke_session_key_works() {
	new_test_ext().execute_with(|| {
		let account = create_default_account();
		assert_noop!(
			SmartAccounts::revoke_session_key(
				RuntimeOrigin::signed(owner()),
				account.clone(),
				stranger(),
			),
			Error::<TestRuntime>::SessionKeyNotFound
		);
		assert_ok!(SmartAccounts::do_create_session_key(&account, stranger(), ONE_DAY));
		assert_ok!(SmartAccounts::revoke_session_key(
			RuntimeOrigin::signed(owner()),
			account.clone(),
			stranger()
		));
		assert!(!SmartAccounts::is_valid_session_key(&account, &stranger()));
	});
}

#[rstest(second_spend_after, expected,
	case(25 * ONE_HOUR, Ok(())),
	case(ONE_HOUR, Err(Error::<TestRuntime>::DailyLimitExceeded.into()))
)]
fn daily_limit_rolls_over(second_spend_after: u64, expected: DispatchResult) {
	new_test_ext().execute_with(|| {
		let account = create_default_account();
		Balances::make_free_balance_be(&account, 1_000);
		assert_ok!(SmartAccounts::set_spending_limit(
			RuntimeOrigin::signed(owner()),
			account.clone(),
			Asset::Native,
			100
		));
		assert_ok!(SmartAccounts::execute(
			RuntimeOrigin::signed(owner()),
			account.clone(),
			transfer(stranger(), 60)
		));
		advance_time(second_spend_after);
		assert_eq!(
			SmartAccounts::execute(
				RuntimeOrigin::signed(owner()),
				account.clone(),
				transfer(stranger(), 60),
			),
			expected
		);
		let expected_balance = if expected.is_ok() { 880 } else { 940 };
		assert_eq!(Balances::free_balance(&account), expected_balance);
	});
}

#[test]
fn zero_cap_is_unlimited_and_unconfigured_assets_are_untracked() {
	new_test_ext().execute_with(|| {
		let account = create_default_account();
		Balances::make_free_balance_be(&account, 1_000);
		assert_ok!(SmartAccounts::do_set_spending_limit(&account, Asset::Native, 0));
		assert_ok!(SmartAccounts::do_execute(&account, transfer(stranger(), 500)));
		assert_eq!(
			SmartAccounts::account(&account).unwrap().spending.get(&Asset::Native).unwrap().spent,
			500,
		);
		assert_eq!(SmartAccounts::remaining_allowance(&account, Asset::Native), None);

		assert_ok!(CustosTokens::do_issue(9, &account, 1_000));
		assert_ok!(SmartAccounts::do_execute(
			&account,
			AccountCall::Transfer { asset: Asset::Token(9), to: stranger(), amount: 1_000 }
		));
		assert_eq!(CustosTokens::balance(9, &stranger()), 1_000);
		assert!(SmartAccounts::account(&account).unwrap().spending.get(&Asset::Token(9)).is_none());
	});
}

#[test]
fn changing_cap_keeps_spent_amount() {
	new_test_ext().execute_with(|| {
		let account = create_default_account();
		Balances::make_free_balance_be(&account, 1_000);
		assert_ok!(SmartAccounts::do_set_spending_limit(&account, Asset::Native, 100));
		assert_ok!(SmartAccounts::do_execute(&account, transfer(stranger(), 80)));
		assert_ok!(SmartAccounts::do_set_spending_limit(&account, Asset::Native, 90));
		assert_eq!(SmartAccounts::remaining_allowance(&account, Asset::Native), Some(10));
		assert_noop!(
			SmartAccounts::do_execute(&account, transfer(stranger(), 11)),
			Error::<TestRuntime>::DailyLimitExceeded
		);
	});
}

#[test]
fn spending_limits_are_bounded() {
	new_test_ext().execute_with(|| {
		let account = create_default_account();
		assert_ok!(SmartAccounts::do_set_spending_limit(&account, Asset::Native, 1));
		assert_ok!(SmartAccounts::do_set_spending_limit(&account, Asset::Token(1), 1));
		assert_noop!(
			SmartAccounts::do_set_spending_limit(&account, Asset::Token(2), 1),
			Error::<TestRuntime>::TooManySpendingLimits
		);
		assert_ok!(SmartAccounts::do_set_spending_limit(&account, Asset::Token(1), 5));
	});
}

#[test]
fn failed_transfer_does_not_count_against_limit() {
	new_test_ext().execute_with(|| {
		let account = create_default_account();
		Balances::make_free_balance_be(&account, 10);
		assert_ok!(SmartAccounts::do_set_spending_limit(&account, Asset::Native, 100));
		assert!(SmartAccounts::execute(
			RuntimeOrigin::signed(owner()),
			account.clone(),
			transfer(stranger(), 50)
		)
		.is_err());
		assert_eq!(SmartAccounts::remaining_allowance(&account, Asset::Native), Some(100));
	});
}

#[test]
fn recovery_end_to_end() {
	new_test_ext().execute_with(|| {
		let account = create_default_account();
		assert_ok!(SmartAccounts::lock_account(
			RuntimeOrigin::signed(guardian(0)),
			account.clone(),
		));

		assert_ok!(SmartAccounts::initiate_recovery(
			RuntimeOrigin::signed(guardian(0)),
			account.clone(),
			new_owner()
		));
		System::assert_last_event(
			Event::RecoveryInitiated {
				id: 0,
				account: account.clone(),
				new_owner: new_owner(),
				execute_after: GENESIS_TIME + 7 * ONE_DAY,
			}
			.into(),
		);

		advance_time(8 * ONE_DAY);
		assert_noop!(
			SmartAccounts::execute_recovery(RuntimeOrigin::signed(stranger()), 0),
			Error::<TestRuntime>::QuorumNotMet
		);

		assert_ok!(SmartAccounts::approve_recovery(RuntimeOrigin::signed(guardian(1)), 0));
		System::assert_last_event(
			Event::RecoveryApproved { id: 0, guardian: guardian(1), approvals: 2 }.into(),
		);
		assert_ok!(SmartAccounts::execute_recovery(RuntimeOrigin::signed(stranger()), 0));

		let info = SmartAccounts::account_info(&account).unwrap();
		assert_eq!(info.owner, new_owner());
		assert!(!info.locked);
		assert_eq!(info.nonce, 1);
		assert!(SmartAccounts::recovery_request(0).unwrap().executed);
		assert_noop!(
			SmartAccounts::execute_recovery(RuntimeOrigin::signed(stranger()), 0),
			Error::<TestRuntime>::RequestNotActive
		);
	});
}

#[test]
fn recovery_respects_delay_even_with_full_quorum() {
	new_test_ext().execute_with(|| {
		let account = create_default_account();
		assert_ok!(SmartAccounts::initiate_recovery(
			RuntimeOrigin::signed(guardian(0)),
			account,
			new_owner()
		));
		assert_ok!(SmartAccounts::approve_recovery(RuntimeOrigin::signed(guardian(1)), 0));
		assert_ok!(SmartAccounts::approve_recovery(RuntimeOrigin::signed(guardian(2)), 0));
		advance_time(7 * ONE_DAY - 1);
		assert_noop!(
			SmartAccounts::execute_recovery(RuntimeOrigin::signed(stranger()), 0),
			Error::<TestRuntime>::DelayNotElapsed
		);
		advance_time(1);
		assert_ok!(SmartAccounts::execute_recovery(RuntimeOrigin::signed(stranger()), 0));
	});
}

#[test]
fn initiate_recovery_validates_input() {
	new_test_ext().execute_with(|| {
		let account = create_default_account();
		assert_noop!(
			SmartAccounts::initiate_recovery(
				RuntimeOrigin::signed(stranger()),
				account.clone(),
				new_owner(),
			),
			Error::<TestRuntime>::NotAGuardian
		);
		assert_noop!(
			SmartAccounts::initiate_recovery(
				RuntimeOrigin::signed(guardian(0)),
				account.clone(),
				AccountId32::new([0u8; 32])
			),
			Error::<TestRuntime>::InvalidOwner
		);
		assert_noop!(
			SmartAccounts::initiate_recovery(
				RuntimeOrigin::signed(guardian(0)),
				account.clone(),
				owner(),
			),
			Error::<TestRuntime>::InvalidOwner
		);
		assert_noop!(
			SmartAccounts::initiate_recovery(
				RuntimeOrigin::signed(guardian(0)),
				account,
				guardian(1),
			),
			Error::<TestRuntime>::GuardianIsOwner
		);
	});
}

#[test]
fn approve_recovery_validates_input() {
	new_test_ext().execute_with(|| {
		let account = create_default_account();
		assert_noop!(
			SmartAccounts::approve_recovery(RuntimeOrigin::signed(guardian(0)), 0),
			Error::<TestRuntime>::RecoveryNotFound
		);
		assert_ok!(SmartAccounts::initiate_recovery(
			RuntimeOrigin::signed(guardian(0)),
			account,
			new_owner()
		));
		assert_noop!(
			SmartAccounts::approve_recovery(RuntimeOrigin::signed(guardian(0)), 0),
			Error::<TestRuntime>::AlreadyApproved
		);
		assert_noop!(
			SmartAccounts::approve_recovery(RuntimeOrigin::signed(stranger()), 0),
			Error::<TestRuntime>::NotAGuardian
		);
	});
}

#[test]
fn owner_can_cancel_recovery_while_locked() {
	new_test_ext().execute_with(|| {
		let account = create_default_account();
		assert_ok!(SmartAccounts::lock_account(
			RuntimeOrigin::signed(guardian(0)),
			account.clone(),
		));
		assert_ok!(SmartAccounts::initiate_recovery(
			RuntimeOrigin::signed(guardian(0)),
			account.clone(),
			new_owner()
		));
		assert_noop!(
			SmartAccounts::cancel_recovery(RuntimeOrigin::signed(guardian(1)), 0),
			Error::<TestRuntime>::NotOwner
		);
		assert_ok!(SmartAccounts::cancel_recovery(RuntimeOrigin::signed(owner()), 0));
		System::assert_last_event(Event::RecoveryCanceled { id: 0, account }.into());

		assert_noop!(
			SmartAccounts::approve_recovery(RuntimeOrigin::signed(guardian(1)), 0),
			Error::<TestRuntime>::RequestNotActive
		);
		assert_noop!(
			SmartAccounts::cancel_recovery(RuntimeOrigin::signed(owner()), 0),
			Error::<TestRuntime>::RequestNotActive
		);
		advance_time(8 * ONE_DAY);
		assert_noop!(
			SmartAccounts::execute_recovery(RuntimeOrigin::signed(stranger()), 0),
			Error::<TestRuntime>::RequestNotActive
		);
	});
}

#[test]
fn executing_a_recovery_cancels_competing_requests() {
	new_test_ext().execute_with(|| {
		let account = create_default_account();
		assert_ok!(SmartAccounts::initiate_recovery(
			RuntimeOrigin::signed(guardian(0)),
			account.clone(),
			new_owner()
		));
		assert_ok!(SmartAccounts::approve_recovery(RuntimeOrigin::signed(guardian(1)), 0));
		assert_ok!(SmartAccounts::initiate_recovery(
			RuntimeOrigin::signed(guardian(1)),
			account.clone(),
			stranger()
		));
		assert_ok!(SmartAccounts::approve_recovery(RuntimeOrigin::signed(guardian(2)), 1));
		assert_eq!(SmartAccounts::pending_recoveries(&account), vec![0, 1]);

		advance_time(8 * ONE_DAY);
		assert_ok!(SmartAccounts::execute_recovery(RuntimeOrigin::signed(stranger()), 0));
		assert!(events::<TestRuntime>()
			.contains(&Event::RecoveryCanceled { id: 1, account: account.clone() }.into()));
		System::assert_last_event(
			Event::RecoveryExecuted { id: 0, account: account.clone(), new_owner: new_owner() }
				.into(),
		);

		// the new owner keeps the account, the stale request is gone
		assert_noop!(
			SmartAccounts::execute_recovery(RuntimeOrigin::signed(stranger()), 1),
			Error::<TestRuntime>::RequestNotActive
		);
		assert!(SmartAccounts::recovery_request(1).unwrap().canceled);
		assert_eq!(SmartAccounts::account_info(&account).unwrap().owner, new_owner());
		assert!(SmartAccounts::pending_recoveries(&account).is_empty());

		// a fresh request runs into the full delay again
		assert_ok!(SmartAccounts::initiate_recovery(
			RuntimeOrigin::signed(guardian(1)),
			account.clone(),
			stranger()
		));
		assert_ok!(SmartAccounts::approve_recovery(RuntimeOrigin::signed(guardian(2)), 2));
		assert_noop!(
			SmartAccounts::execute_recovery(RuntimeOrigin::signed(stranger()), 2),
			Error::<TestRuntime>::DelayNotElapsed
		);
		assert_ok!(SmartAccounts::cancel_recovery(RuntimeOrigin::signed(new_owner()), 2));
	});
}

#[test]
fn guardian_has_one_pending_request_per_account() {
	new_test_ext().execute_with(|| {
		let account = create_default_account();
		assert_ok!(SmartAccounts::initiate_recovery(
			RuntimeOrigin::signed(guardian(0)),
			account.clone(),
			new_owner()
		));
		assert_noop!(
			SmartAccounts::initiate_recovery(
				RuntimeOrigin::signed(guardian(0)),
				account.clone(),
				stranger(),
			),
			Error::<TestRuntime>::RecoveryAlreadyInitiated
		);

		assert_ok!(SmartAccounts::cancel_recovery(RuntimeOrigin::signed(owner()), 0));
		assert!(SmartAccounts::pending_recoveries(&account).is_empty());
		assert_ok!(SmartAccounts::initiate_recovery(
			RuntimeOrigin::signed(guardian(0)),
			account.clone(),
			stranger()
		));
		assert_eq!(SmartAccounts::pending_recoveries(&account), vec![1]);
	});
}

#[test]
fn approvals_of_removed_guardians_do_not_count() {
	new_test_ext().execute_with(|| {
		let account = create_default_account();
		assert_ok!(SmartAccounts::initiate_recovery(
			RuntimeOrigin::signed(guardian(0)),
			account.clone(),
			new_owner()
		));
		assert_ok!(SmartAccounts::approve_recovery(RuntimeOrigin::signed(guardian(1)), 0));
		assert_ok!(SmartAccounts::remove_guardian(
			RuntimeOrigin::signed(owner()),
			account.clone(),
			guardian(1)
		));
		advance_time(7 * ONE_DAY);
		assert_noop!(
			SmartAccounts::execute_recovery(RuntimeOrigin::signed(stranger()), 0),
			Error::<TestRuntime>::QuorumNotMet
		);
		assert_ok!(SmartAccounts::approve_recovery(RuntimeOrigin::signed(guardian(2)), 0));
		assert_eq!(
			SmartAccounts::recovery_request(0).unwrap().approvals,
			vec![guardian(0), guardian(2)],
		);
		assert_ok!(SmartAccounts::execute_recovery(RuntimeOrigin::signed(stranger()), 0));
	});
}

#[test]
fn recovery_clears_session_keys_of_previous_owner() {
	new_test_ext().execute_with(|| {
		let account = create_default_account();
		assert_ok!(SmartAccounts::do_create_session_key(&account, stranger(), 30 * ONE_DAY));
		assert_ok!(SmartAccounts::initiate_recovery(
			RuntimeOrigin::signed(guardian(0)),
			account.clone(),
			new_owner()
		));
		assert_ok!(SmartAccounts::approve_recovery(RuntimeOrigin::signed(guardian(2)), 0));
		advance_time(7 * ONE_DAY);
		assert_ok!(SmartAccounts::execute_recovery(RuntimeOrigin::signed(new_owner()), 0));
		assert!(!SmartAccounts::is_valid_session_key(&account, &stranger()));
		assert_noop!(
			SmartAccounts::add_guardian(
				RuntimeOrigin::signed(owner()),
				account.clone(),
				stranger(),
			),
			Error::<TestRuntime>::NotOwner
		);
		assert_ok!(SmartAccounts::add_guardian(
			RuntimeOrigin::signed(new_owner()),
			account,
			stranger(),
		));
	});
}

#[test]
fn consume_nonce_only_accepts_current_nonce() {
	new_test_ext().execute_with(|| {
		let account = create_default_account();
		assert_noop!(SmartAccounts::consume_nonce(&account, 1), Error::<TestRuntime>::InvalidNonce);
		assert_ok!(SmartAccounts::consume_nonce(&account, 0));
		assert_ok!(SmartAccounts::consume_nonce(&account, 1));
		assert_eq!(SmartAccounts::nonce(&account), 2);
		assert_noop!(SmartAccounts::consume_nonce(&account, 1), Error::<TestRuntime>::InvalidNonce);
		assert_noop!(
			SmartAccounts::consume_nonce(&stranger(), 0),
			Error::<TestRuntime>::AccountNotFound,
		);
	});
}

#[test]
fn unsigned_origins_are_rejected() {
	new_test_ext().execute_with(|| {
		assert_noop!(
			SmartAccounts::create_account(RuntimeOrigin::none(), owner(), guardians(), 2, None, 0),
			DispatchError::BadOrigin
		);
	});
}
