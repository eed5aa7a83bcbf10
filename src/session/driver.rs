//! The session driver: owns every component and runs the turn loop.
//!
//! A `GameSession` is built once per game from a `SessionBuilder` - the
//! board, ledger, holdings index, turn state, and decks are plain owned
//! fields, injected nowhere else, so parallel sessions never share
//! state. One call to `take_turn` plays one roll segment for the active
//! player: jail handling, movement with salary, space resolution
//! (rent, purchase offer, tax, card), and the doubles repeat-or-advance
//! decision. Insolvent debts trigger liquidation and, failing that,
//! bankruptcy; the session ends when one player remains.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auction::{Auction, AuctionOutcome};
use crate::board::{
    Board, CornerKind, DeckKind, SpaceId, SpaceKind, TaxKind, GO, INCOME_TAX_FLAT,
    INCOME_TAX_PERCENT, JAIL, LUXURY_TAX,
};
use crate::cards::{chance_cards, community_chest_cards, Card, Deck};
use crate::core::{DiceRoll, GameRng, Money, PlayerId, PlayerMap};
use crate::economy::{HoldingsIndex, Ledger};
use crate::session::decision::{DecisionProvider, JailAction, TaxPayment};
use crate::session::observer::GameObserver;
use crate::session::policy::AutoPolicy;
use crate::turn::{RollVerdict, TurnState};

/// Default bankroll each player starts with.
pub const DEFAULT_STARTING_BALANCE: Money = 1_500;

/// Default salary for passing Go.
pub const DEFAULT_GO_SALARY: Money = 200;

/// Default fine to leave jail.
pub const DEFAULT_JAIL_FINE: Money = 50;

/// Failed doubles attempts before the jail fine becomes mandatory.
const MAX_JAIL_TURNS: u8 = 3;

/// Per-player game status outside the ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStatus {
    /// Token location.
    pub position: SpaceId,
    pub in_jail: bool,
    /// Failed roll-for-doubles attempts this jail stay.
    pub jail_turns: u8,
    /// Get-out-of-jail-free cards held.
    pub jail_cards: u8,
    /// Out of the game for good.
    pub retired: bool,
}

impl Default for PlayerStatus {
    fn default() -> Self {
        Self {
            position: GO,
            in_jail: false,
            jail_turns: 0,
            jail_cards: 0,
            retired: false,
        }
    }
}

/// What a landed-on space demands, computed before any mutation.
enum Resolution {
    Nothing,
    Offer,
    Rent { landlord: PlayerId, amount: Money },
    IncomeTax,
    FlatTax(Money),
    Draw(DeckKind),
    GoToJail,
}

/// Builder for a [`GameSession`].
///
/// Every seat defaults to the automated policy; swap in a different
/// provider per seat for human play or scripted tests.
pub struct SessionBuilder {
    players: usize,
    starting_balance: Money,
    go_salary: Money,
    jail_fine: Money,
    providers: Vec<(PlayerId, Box<dyn DecisionProvider>)>,
    observers: Vec<Box<dyn GameObserver>>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            players: 4,
            starting_balance: DEFAULT_STARTING_BALANCE,
            go_salary: DEFAULT_GO_SALARY,
            jail_fine: DEFAULT_JAIL_FINE,
            providers: Vec::new(),
            observers: Vec::new(),
        }
    }
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn players(mut self, count: usize) -> Self {
        assert!((2..=8).contains(&count), "Player count must be 2-8");
        self.players = count;
        self
    }

    pub fn starting_balance(mut self, amount: Money) -> Self {
        self.starting_balance = amount;
        self
    }

    pub fn go_salary(mut self, amount: Money) -> Self {
        self.go_salary = amount;
        self
    }

    pub fn jail_fine(mut self, amount: Money) -> Self {
        self.jail_fine = amount;
        self
    }

    /// Seat a custom decision provider.
    pub fn provider(mut self, player: PlayerId, provider: Box<dyn DecisionProvider>) -> Self {
        self.providers.push((player, provider));
        self
    }

    /// Attach an advisory observer.
    pub fn observer(mut self, observer: Box<dyn GameObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Build the session: board and decks constructed, players
    /// registered and seeded, turn order drawn.
    pub fn build(self, seed: u64) -> GameSession {
        let mut rng = GameRng::new(seed);
        let board = Board::standard();
        let holdings = HoldingsIndex::new(&board);

        let mut ledger = Ledger::new(self.starting_balance);
        for player in PlayerId::all(self.players) {
            ledger
                .register(player)
                .expect("fresh player ids are distinct");
        }

        let turn = TurnState::new(self.players, &mut rng);
        let chance = Deck::new(chance_cards(), &mut rng);
        let chest = Deck::new(community_chest_cards(), &mut rng);

        let mut providers: PlayerMap<Box<dyn DecisionProvider>> =
            PlayerMap::new(self.players, |_| {
                Box::new(AutoPolicy::default()) as Box<dyn DecisionProvider>
            });
        for (player, provider) in self.providers {
            providers[player] = provider;
        }

        GameSession {
            go_salary: self.go_salary,
            jail_fine: self.jail_fine,
            board,
            ledger,
            holdings,
            turn,
            status: PlayerMap::new(self.players, |_| PlayerStatus::default()),
            chance,
            chest,
            providers,
            observers: self.observers,
            rng,
        }
    }
}

/// One running game.
pub struct GameSession {
    go_salary: Money,
    jail_fine: Money,
    board: Board,
    ledger: Ledger,
    holdings: HoldingsIndex,
    turn: TurnState,
    status: PlayerMap<PlayerStatus>,
    chance: Deck,
    chest: Deck,
    providers: PlayerMap<Box<dyn DecisionProvider>>,
    observers: Vec<Box<dyn GameObserver>>,
    rng: GameRng,
}

impl GameSession {
    /// Start configuring a session.
    #[must_use]
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The bank ledger.
    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The deed index.
    #[must_use]
    pub fn holdings(&self) -> &HoldingsIndex {
        &self.holdings
    }

    /// The rotation.
    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    /// A player's status.
    #[must_use]
    pub fn status(&self, player: PlayerId) -> &PlayerStatus {
        &self.status[player]
    }

    /// Seats at the table, retired or not.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.status.player_count()
    }

    /// Whether the game has a winner (or nobody left at all).
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.turn.remaining() <= 1
    }

    /// The last player standing, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        if self.turn.remaining() == 1 {
            Some(self.turn.active())
        } else {
            None
        }
    }

    /// Play one roll segment for the active player using internal dice.
    pub fn take_turn(&mut self) {
        if self.is_over() {
            return;
        }
        let player = self.turn.active();
        if self.status[player].in_jail {
            self.jail_turn(player);
            if !self.status[player].retired {
                self.improvement_pass(player);
                self.turn.advance();
            }
            return;
        }
        let roll = self.rng.roll();
        self.take_turn_with_roll(roll);
    }

    /// Play one roll segment with externally supplied dice.
    ///
    /// The presentation layer may own the physical dice; the doubles
    /// bookkeeping still happens here. Jail turns ignore the supplied
    /// roll and use internal dice for the escape attempt.
    pub fn take_turn_with_roll(&mut self, roll: DiceRoll) {
        if self.is_over() {
            return;
        }
        let player = self.turn.active();
        if self.status[player].in_jail {
            self.jail_turn(player);
            if !self.status[player].retired {
                self.improvement_pass(player);
                self.turn.advance();
            }
            return;
        }
        info!(%player, %roll, "turn");

        let verdict = self.turn.record_roll(roll);
        if verdict == RollVerdict::Speeding {
            self.say(format!("{player} rolled a third straight double"));
            self.send_to_jail(player);
            self.turn.advance();
            return;
        }

        self.move_and_resolve(player, roll);

        if self.status[player].retired {
            // The rotation already moved on when the player retired.
            return;
        }
        if self.status[player].in_jail {
            self.turn.advance();
            return;
        }
        self.improvement_pass(player);
        if verdict == RollVerdict::Proceed {
            self.turn.advance();
        }
    }

    /// Run turns until a winner emerges or `max_turns` is spent.
    pub fn run(&mut self, max_turns: usize) -> Option<PlayerId> {
        for _ in 0..max_turns {
            if self.is_over() {
                break;
            }
            self.take_turn();
        }
        self.winner()
    }

    // === Jail ===

    fn jail_turn(&mut self, player: PlayerId) {
        let balance = self.ledger.balance(player).unwrap_or(0);
        let cards = self.status[player].jail_cards;
        let mut action = self
            .providers
            .get_mut(player)
            .decide_jail_action(player, balance, cards);
        if action == JailAction::UseCard && cards == 0 {
            action = JailAction::RollForDoubles;
        }

        match action {
            JailAction::UseCard => {
                self.status[player].jail_cards -= 1;
                self.return_jail_card();
                self.leave_jail(player);
                self.say(format!("{player} plays a get-out-of-jail-free card"));
                let roll = self.rng.roll();
                self.move_and_resolve(player, roll);
            }
            JailAction::PayFine => {
                if self.settle_debt(player, self.jail_fine, None) {
                    self.leave_jail(player);
                    self.say(format!("{player} pays the fine and walks"));
                    let roll = self.rng.roll();
                    self.move_and_resolve(player, roll);
                }
            }
            JailAction::RollForDoubles => {
                let roll = self.rng.roll();
                if roll.is_double() {
                    self.leave_jail(player);
                    self.say(format!("{player} rolls {roll} and walks free"));
                    self.move_and_resolve(player, roll);
                } else {
                    self.status[player].jail_turns += 1;
                    if self.status[player].jail_turns >= MAX_JAIL_TURNS {
                        // Third failed attempt: the fine is due, then move.
                        if self.settle_debt(player, self.jail_fine, None) {
                            self.leave_jail(player);
                            self.move_and_resolve(player, roll);
                        }
                    } else {
                        self.say(format!("{player} fails to roll out of jail"));
                    }
                }
            }
        }
    }

    fn leave_jail(&mut self, player: PlayerId) {
        self.status[player].in_jail = false;
        self.status[player].jail_turns = 0;
    }

    fn send_to_jail(&mut self, player: PlayerId) {
        self.status[player].position = JAIL;
        self.status[player].in_jail = true;
        self.status[player].jail_turns = 0;
        self.notify_position(player);
        self.say(format!("{player} goes to jail"));
    }

    fn return_jail_card(&mut self) {
        if self.chance.awaits_jail_card() {
            self.chance.return_jail_card();
        } else {
            self.chest.return_jail_card();
        }
    }

    // === Movement & resolution ===

    fn move_and_resolve(&mut self, player: PlayerId, roll: DiceRoll) {
        let from = self.status[player].position;
        let (dest, passed_go) = self.board.destination(from, roll.sum());
        if passed_go {
            self.collect_salary(player);
        }
        self.move_token(player, dest);
        self.resolve_space(player, dest, roll.sum());
    }

    fn collect_salary(&mut self, player: PlayerId) {
        if self.ledger.deposit(player, self.go_salary).is_ok() {
            self.notify_balance(player);
        }
    }

    fn move_token(&mut self, player: PlayerId, dest: SpaceId) {
        self.status[player].position = dest;
        self.notify_position(player);
    }

    fn resolve_space(&mut self, player: PlayerId, space: SpaceId, roll_sum: u8) {
        let resolution = match &self.board.space(space).kind {
            SpaceKind::Street(_) | SpaceKind::Railroad(_) | SpaceKind::Utility(_) => {
                match self.board.space(space).owner() {
                    None => Resolution::Offer,
                    Some(landlord)
                        if landlord != player && !self.board.space(space).is_mortgaged() =>
                    {
                        Resolution::Rent {
                            landlord,
                            amount: self.board.rent_due(space, roll_sum),
                        }
                    }
                    Some(_) => Resolution::Nothing,
                }
            }
            SpaceKind::Tax(TaxKind::Income) => Resolution::IncomeTax,
            SpaceKind::Tax(TaxKind::Luxury) => Resolution::FlatTax(LUXURY_TAX),
            SpaceKind::Draw(deck) => Resolution::Draw(*deck),
            SpaceKind::Corner(CornerKind::GoToJail) => Resolution::GoToJail,
            SpaceKind::Corner(_) => Resolution::Nothing,
        };

        match resolution {
            Resolution::Nothing => {}
            Resolution::Offer => self.purchase_offer(player, space),
            Resolution::Rent { landlord, amount } => {
                if amount > 0 && self.settle_debt(player, amount, Some(landlord)) {
                    let name = self.board.space(space).name;
                    self.say(format!("{player} pays ${amount} rent at {name}"));
                }
            }
            Resolution::IncomeTax => self.income_tax(player),
            Resolution::FlatTax(amount) => {
                self.settle_debt(player, amount, None);
            }
            Resolution::Draw(deck) => self.draw_card(player, deck),
            Resolution::GoToJail => self.send_to_jail(player),
        }
    }

    fn income_tax(&mut self, player: PlayerId) {
        let balance = self.ledger.balance(player).unwrap_or(0);
        let percent_amount = balance * INCOME_TAX_PERCENT / 100;
        let choice = self.providers.get_mut(player).choose_tax_payment(
            player,
            INCOME_TAX_FLAT,
            percent_amount,
        );
        let amount = match choice {
            TaxPayment::Flat => INCOME_TAX_FLAT,
            TaxPayment::Percentage => percent_amount,
        };
        self.settle_debt(player, amount, None);
    }

    // === Purchases & auctions ===

    fn purchase_offer(&mut self, player: PlayerId, space: SpaceId) {
        let Some(price) = self.board.space(space).price() else {
            return;
        };
        let balance = self.ledger.balance(player).unwrap_or(0);
        let wants = balance >= price
            && self
                .providers
                .get_mut(player)
                .decide_purchase(player, space, price, balance);

        if wants
            && self
                .holdings
                .sell(&mut self.board, &mut self.ledger, space, player)
                .is_ok()
        {
            let name = self.board.space(space).name;
            self.say(format!("{player} buys {name} for ${price}"));
            self.notify_balance(player);
            self.notify_ownership(space);
            return;
        }
        self.run_auction(space);
    }

    fn run_auction(&mut self, space: SpaceId) {
        let roster: Vec<PlayerId> = self.turn.order().to_vec();
        let Some(price) = self.board.space(space).price() else {
            return;
        };
        let Some(mut auction) = Auction::start(space, &roster, &self.holdings) else {
            return;
        };
        self.say(format!("{} goes to auction", self.board.space(space).name));

        while auction.active_count() > 1 {
            for &bidder in &roster {
                if auction.active_count() <= 1 {
                    break;
                }
                // The standing leader has nothing to answer this round.
                if !auction.is_active(bidder) || auction.highest_bidder() == Some(bidder) {
                    continue;
                }
                let balance = self.ledger.balance(bidder).unwrap_or(0);
                let amount = self.providers.get_mut(bidder).decide_bid(
                    bidder,
                    space,
                    price,
                    auction.highest_bid(),
                    balance,
                );
                if amount <= 0 || auction.bid(bidder, amount, &self.ledger).is_err() {
                    let _ = auction.pass(bidder);
                }
            }
        }

        match auction.settle() {
            Ok(AuctionOutcome::Won { player, price }) => {
                if self
                    .holdings
                    .sell_at(&mut self.board, &mut self.ledger, space, player, price)
                    .is_ok()
                {
                    let name = self.board.space(space).name;
                    self.say(format!("{player} wins {name} at auction for ${price}"));
                    self.notify_balance(player);
                    self.notify_ownership(space);
                }
            }
            _ => {
                let name = self.board.space(space).name;
                self.say(format!("{name} stays with the bank"));
            }
        }
    }

    // === Cards ===

    fn draw_card(&mut self, player: PlayerId, deck: DeckKind) {
        let card = match deck {
            DeckKind::Chance => self.chance.draw(),
            DeckKind::CommunityChest => self.chest.draw(),
        };
        if let Some(card) = card {
            self.apply_card(player, card);
        }
    }

    fn apply_card(&mut self, player: PlayerId, card: Card) {
        match card {
            Card::Collect(amount) => {
                if self.ledger.deposit(player, amount).is_ok() {
                    self.notify_balance(player);
                }
            }
            Card::Pay(amount) => {
                self.settle_debt(player, amount, None);
            }
            Card::CollectFromEach(amount) => {
                let others: Vec<PlayerId> = self
                    .turn
                    .order()
                    .iter()
                    .copied()
                    .filter(|&p| p != player)
                    .collect();
                for other in others {
                    self.settle_debt(other, amount, Some(player));
                }
            }
            Card::PayEach(amount) => {
                let others: Vec<PlayerId> = self
                    .turn
                    .order()
                    .iter()
                    .copied()
                    .filter(|&p| p != player)
                    .collect();
                for other in others {
                    if !self.settle_debt(player, amount, Some(other)) {
                        break;
                    }
                }
            }
            Card::AdvanceTo(dest) => {
                let from = self.status[player].position;
                if self.board.passes_go(from, dest) {
                    self.collect_salary(player);
                }
                self.move_token(player, dest);
                // Cards never target utilities, so a nominal roll is fine.
                self.resolve_space(player, dest, 7);
            }
            Card::GoToJail => self.send_to_jail(player),
            Card::GetOutOfJailFree => {
                self.status[player].jail_cards += 1;
                self.say(format!("{player} keeps a get-out-of-jail-free card"));
            }
            Card::Repairs {
                per_house,
                per_hotel,
            } => {
                let cost = per_house * Money::from(self.board.houses_of(player))
                    + per_hotel * Money::from(self.board.hotels_of(player));
                self.settle_debt(player, cost, None);
            }
        }
    }

    // === Debts, liquidation, bankruptcy ===

    /// Pay `amount` to the creditor (or the bank), liquidating holdings
    /// if cash is short. Returns false when the debtor went bankrupt
    /// instead of paying in full.
    fn settle_debt(&mut self, debtor: PlayerId, amount: Money, creditor: Option<PlayerId>) -> bool {
        if amount <= 0 {
            return true;
        }
        if self.ledger.balance(debtor).unwrap_or(0) < amount {
            self.liquidate(debtor, amount);
        }
        let paid = match creditor {
            Some(c) => self.ledger.transfer(debtor, c, amount).is_ok(),
            None => self.ledger.withdraw(debtor, amount).is_ok(),
        };
        if paid {
            self.notify_balance(debtor);
            if let Some(c) = creditor {
                self.notify_balance(c);
            }
            true
        } else {
            self.bankrupt(debtor, creditor);
            false
        }
    }

    /// Raise cash toward `target`: sell improvements under even-sell,
    /// then mortgage titles, until the target is met or nothing sellable
    /// remains.
    fn liquidate(&mut self, player: PlayerId, target: Money) {
        loop {
            if self.ledger.balance(player).unwrap_or(0) >= target {
                return;
            }
            let mut deeds: Vec<SpaceId> = self.holdings.holdings_of(player).into_iter().collect();
            deeds.sort_unstable();

            let mut acted = false;
            for &space in &deeds {
                let has_hotel = self.board.space(space).as_street().is_some_and(|p| p.hotel);
                let sold = if has_hotel {
                    self.board.sell_hotel(space, &mut self.ledger)
                } else {
                    self.board.sell_improvement(space, &mut self.ledger)
                };
                if sold {
                    acted = true;
                    break;
                }
            }
            if !acted {
                for &space in &deeds {
                    if self.board.mortgage(space, &mut self.ledger) {
                        acted = true;
                        break;
                    }
                }
            }
            if !acted {
                return;
            }
            self.notify_balance(player);
        }
    }

    /// Pay out whatever is left, return every title to the bank, and
    /// leave the rotation.
    fn bankrupt(&mut self, debtor: PlayerId, creditor: Option<PlayerId>) {
        let remaining = self.ledger.balance(debtor).unwrap_or(0);
        if remaining > 0 {
            let paid_out = match creditor {
                Some(c) => self.ledger.transfer(debtor, c, remaining).is_ok(),
                None => self.ledger.withdraw(debtor, remaining).is_ok(),
            };
            if paid_out {
                if let Some(c) = creditor {
                    self.notify_balance(c);
                }
            }
        }

        let mut deeds: Vec<SpaceId> = self.holdings.holdings_of(debtor).into_iter().collect();
        deeds.sort_unstable();
        for space in deeds {
            self.board.repossess(space, &mut self.ledger);
            let _ = self
                .holdings
                .release_title(&mut self.board, debtor, space);
            self.notify_ownership(space);
        }

        let _ = self.ledger.deregister(debtor);
        self.status[debtor].retired = true;
        self.turn.retire(debtor);
        self.say(format!("{debtor} is bankrupt"));
        info!(%debtor, "bankrupt");
    }

    // === Automated building ===

    /// Let the player's provider build on improvable streets until it
    /// declines or the rules or funds refuse.
    fn improvement_pass(&mut self, player: PlayerId) {
        loop {
            let mut deeds: Vec<SpaceId> = self.holdings.holdings_of(player).into_iter().collect();
            deeds.sort_unstable();

            let mut built = false;
            for space in deeds {
                let cost = match self.board.space(space).as_street() {
                    Some(street) => self.board.group(street.group).house_cost(),
                    None => continue,
                };
                let hotel_ready = self.board.can_add_hotel(space);
                if !hotel_ready && !self.board.can_improve(space) {
                    continue;
                }
                let balance = self.ledger.balance(player).unwrap_or(0);
                if !self
                    .providers
                    .get_mut(player)
                    .wants_improvement(player, space, cost, balance)
                {
                    continue;
                }
                let done = if hotel_ready {
                    self.board.buy_hotel(space, &mut self.ledger)
                } else {
                    self.board.buy_improvement(space, &mut self.ledger)
                };
                if done {
                    self.notify_balance(player);
                    built = true;
                }
            }
            if !built {
                return;
            }
        }
    }

    // === Notifications ===

    fn notify_balance(&mut self, player: PlayerId) {
        let balance = self.ledger.balance(player).unwrap_or(0);
        for observer in &mut self.observers {
            observer.balance_changed(player, balance);
        }
    }

    fn notify_ownership(&mut self, space: SpaceId) {
        let owner = self.board.space(space).owner();
        for observer in &mut self.observers {
            observer.ownership_changed(space, owner);
        }
    }

    fn notify_position(&mut self, player: PlayerId) {
        let position = self.status[player].position;
        for observer in &mut self.observers {
            observer.position_changed(player, position);
        }
    }

    fn say(&mut self, text: String) {
        info!("{text}");
        for observer in &mut self.observers {
            observer.message(&text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_registers_and_seeds_players() {
        let session = GameSession::builder().players(4).build(42);

        assert_eq!(session.player_count(), 4);
        for player in PlayerId::all(4) {
            assert_eq!(session.ledger().balance(player).unwrap(), 1_500);
            assert_eq!(session.status(player).position, GO);
            assert!(!session.status(player).in_jail);
        }
        assert_eq!(session.holdings().available_count(), 28);
        assert!(!session.is_over());
    }

    #[test]
    fn test_builder_custom_bankroll() {
        let session = GameSession::builder()
            .players(2)
            .starting_balance(800)
            .build(7);
        assert_eq!(
            session.ledger().balance(PlayerId::new(0)).unwrap(),
            800
        );
    }

    #[test]
    fn test_turn_order_is_a_permutation() {
        let session = GameSession::builder().players(4).build(11);
        let mut seats: Vec<u8> = session.turn().order().iter().map(|p| p.0).collect();
        seats.sort_unstable();
        assert_eq!(seats, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_sessions_with_same_seed_replay_identically() {
        let mut a = GameSession::builder().players(4).build(99);
        let mut b = GameSession::builder().players(4).build(99);

        for _ in 0..200 {
            a.take_turn();
            b.take_turn();
        }

        for player in PlayerId::all(4) {
            assert_eq!(
                a.ledger().balance(player).ok(),
                b.ledger().balance(player).ok()
            );
            assert_eq!(a.status(player), b.status(player));
        }
        assert_eq!(a.turn().order(), b.turn().order());
    }

    #[test]
    fn test_holdings_stay_consistent_through_play() {
        let mut session = GameSession::builder().players(4).build(3);

        for _ in 0..300 {
            if session.is_over() {
                break;
            }
            session.take_turn();
            session.holdings().assert_consistent(session.board());
        }
    }

    #[test]
    fn test_balances_never_negative_through_play() {
        let mut session = GameSession::builder().players(4).build(17);

        for _ in 0..400 {
            if session.is_over() {
                break;
            }
            session.take_turn();
            for player in session.ledger().players().collect::<Vec<_>>() {
                assert!(session.ledger().balance(player).unwrap() >= 0);
            }
        }
    }
}
