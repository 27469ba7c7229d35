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
use crate::mock::{new_test_ext, CustosTokens, RuntimeOrigin, System, TestRuntime};
use frame_support::{assert_noop, assert_ok};
use sp_runtime::DispatchError;
use test_utils::*;

fn alice() -> AccountId {
	Sr25519Keyring::Alice.to_account_id()
}

fn bob() -> AccountId {
	Sr25519Keyring::Bob.to_account_id()
}

const TOKEN: TokenId = 3;

#[test]
fn issue_and_burn_track_total_issuance() {
	new_test_ext().execute_with(|| {
		let alice = alice();
		assert_ok!(CustosTokens::issue(RuntimeOrigin::root(), TOKEN, alice.clone(), 50));
		assert_eq!(CustosTokens::balance(TOKEN, &alice), 50);
		assert_eq!(CustosTokens::total_issuance(TOKEN), 50);

		assert_ok!(CustosTokens::burn(RuntimeOrigin::root(), TOKEN, alice.clone(), 20));
		assert_eq!(CustosTokens::balance(TOKEN, &alice), 30);
		assert_eq!(CustosTokens::total_issuance(TOKEN), 30);
		System::assert_last_event(Event::Burned { token: TOKEN, who: alice, amount: 20 }.into());
	});
}

#[test]
fn issue_requires_issuer_origin() {
	new_test_ext().execute_with(|| {
		let alice = alice();
		assert_noop!(
			CustosTokens::issue(RuntimeOrigin::signed(alice.clone()), TOKEN, alice, 50),
			DispatchError::BadOrigin
		);
	});
}

#[test]
fn issue_fails_on_total_issuance_overflow() {
	new_test_ext().execute_with(|| {
		let alice = alice();
		let bob = bob();
		assert_ok!(CustosTokens::do_issue(TOKEN, &alice, u128::MAX));
		assert_noop!(
			CustosTokens::do_issue(TOKEN, &bob, 1),
			Error::<TestRuntime>::TotalIssuanceOverflow
		);
	});
}

#[test]
fn transfer_works() {
	new_test_ext().execute_with(|| {
		let alice = alice();
		let bob = bob();
		assert_ok!(CustosTokens::do_issue(TOKEN, &alice, 50));
		assert_ok!(CustosTokens::transfer(
			RuntimeOrigin::signed(alice.clone()),
			bob.clone(),
			TOKEN,
			10
		));
		assert_eq!(CustosTokens::balance(TOKEN, &alice), 40);
		assert_eq!(CustosTokens::balance(TOKEN, &bob), 10);
		assert_eq!(CustosTokens::total_issuance(TOKEN), 50);
		System::assert_last_event(
			Event::Transferred { token: TOKEN, from: alice, to: bob, amount: 10 }.into(),
		);
	});
}

#[test]
fn transfer_fails_with_insufficient_balance() {
	new_test_ext().execute_with(|| {
		let alice = alice();
		let bob = bob();
		assert_ok!(CustosTokens::do_issue(TOKEN, &alice, 50));
		assert_noop!(
			CustosTokens::transfer(RuntimeOrigin::signed(alice), bob, TOKEN, 51),
			Error::<TestRuntime>::BalanceTooLow
		);
	});
}

#[test]
fn tokens_are_separate_ledgers() {
	new_test_ext().execute_with(|| {
		let alice = alice();
		let bob = bob();
		assert_ok!(CustosTokens::do_issue(TOKEN, &alice, 50));
		assert_noop!(
			CustosTokens::do_transfer(TOKEN + 1, &alice, &bob, 1),
			Error::<TestRuntime>::BalanceTooLow
		);
		assert_eq!(CustosTokens::total_issuance(TOKEN + 1), 0);
	});
}

#[test]
fn transfer_to_self_keeps_balance() {
	new_test_ext().execute_with(|| {
		let alice = alice();
		assert_ok!(CustosTokens::do_issue(TOKEN, &alice, 50));
		assert_ok!(CustosTokens::do_transfer(TOKEN, &alice, &alice, 50));
		assert_eq!(CustosTokens::balance(TOKEN, &alice), 50);
	});
}

#[test]
fn burn_fails_with_insufficient_balance() {
	new_test_ext().execute_with(|| {
		let alice = alice();
		assert_ok!(CustosTokens::do_issue(TOKEN, &alice, 5));
		assert_noop!(
			CustosTokens::burn(RuntimeOrigin::root(), TOKEN, alice, 6),
			Error::<TestRuntime>::BalanceTooLow
		);
	});
}
