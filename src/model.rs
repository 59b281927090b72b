use serde::{Deserialize, Serialize};

/// Joueur : le nom est l'identité, sensible à la casse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Wins")]
    pub wins: u64,
}

impl Player {
    pub fn new<N: Into<String>>(name: N, wins: u64) -> Self {
        Self {
            name: name.into(),
            wins,
        }
    }
}

/// League complète, dans l'ordre du fichier.
///
/// Encodée comme le tableau JSON nu `[{"Name": .., "Wins": ..}, ...]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct League(Vec<Player>);

impl League {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn find<'a>(&'a self, name: &str) -> Option<&'a Player> {
        self.0.iter().find(|p| p.name == name)
    }
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.0.iter_mut().find(|p| p.name == name)
    }

    pub fn push(&mut self, player: Player) {
        self.0.push(player);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<Player> {
        self.0
    }

    /// Copie triée par victoires décroissantes.
    ///
    /// `sort_by` est stable : à égalité, l'ordre décodé est conservé.
    pub fn sorted(&self) -> League {
        let mut players = self.0.clone();
        players.sort_by(|a, b| b.wins.cmp(&a.wins));
        League(players)
    }

    /// Incrémente le joueur existant, ou l'ajoute avec une victoire.
    ///
    /// Renvoie le nouveau total. Au-delà de `u64::MAX` rien n'est modifié.
    pub fn record_win(&mut self, name: &str) -> Result<u64, String> {
        match self.find_mut(name) {
            Some(player) => {
                player.wins = player
                    .wins
                    .checked_add(1)
                    .ok_or_else(|| format!("wins overflow for {name}"))?;
                Ok(player.wins)
            }
            None => {
                self.push(Player::new(name, 1));
                Ok(1)
            }
        }
    }
}

impl From<Vec<Player>> for League {
    fn from(players: Vec<Player>) -> Self {
        Self(players)
    }
}

impl FromIterator<Player> for League {
    fn from_iter<I: IntoIterator<Item = Player>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a League {
    type Item = &'a Player;
    type IntoIter = std::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_keeps_file_order_on_ties() {
        let league: League = vec![
            Player::new("Ana", 3),
            Player::new("Bea", 7),
            Player::new("Cid", 3),
            Player::new("Dan", 7),
        ]
        .into();

        let sorted = league.sorted();
        let names: Vec<&str> = sorted.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Bea", "Dan", "Ana", "Cid"]);
        // l'original n'est pas modifié
        assert_eq!(league.iter().next().map(|p| p.name.as_str()), Some("Ana"));
    }

    #[test]
    fn record_win_is_case_sensitive() {
        let mut league = League::from(vec![Player::new("paul", 2)]);
        assert_eq!(league.record_win("Paul"), Ok(1));
        assert_eq!(league.record_win("paul"), Ok(3));

        assert_eq!(league.find("paul").map(|p| p.wins), Some(3));
        assert_eq!(league.find("Paul").map(|p| p.wins), Some(1));
        assert_eq!(league.len(), 2);
    }

    #[test]
    fn record_win_refuses_to_wrap() {
        let mut league = League::from(vec![Player::new("Paul", u64::MAX)]);
        assert!(league.record_win("Paul").is_err());
        assert_eq!(league.find("Paul").map(|p| p.wins), Some(u64::MAX));
    }

    #[test]
    fn wire_field_names() {
        let json = serde_json::to_string(&League::from(vec![Player::new("Cleo", 10)])).unwrap();
        assert_eq!(json, r#"[{"Name":"Cleo","Wins":10}]"#);
    }
}
