// src/config/pools.rs
//
// Curated replacement-image pools. The built-in tables are the known-good
// storefront shots collected by hand; a JSON pools file can override either
// table and is validated once at load against the category allow-list.

use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::consts::KNOWN_CATEGORIES;

/* ---------------- Built-in tables ---------------- */

const CHANDELIERS: &[&str] = &[
    "https://brightet.com/cdn/shop/files/71K-chpX1OL._AC_SL1500.jpg?v=1754682995&width=800",
    "https://brightet.com/cdn/shop/files/2c5cfcbb38d77b027814568aa2d77001.jpg?v=1755543215&width=800",
    "https://brightet.com/cdn/shop/files/81D70T5ThoL._AC_SL1500.jpg?v=1755360633&width=800",
    "https://brightet.com/cdn/shop/files/81_NJU-ngCL._AC_SL1500.jpg?v=1754685016&width=800",
    "https://brightet.com/cdn/shop/files/81tNzkaYZlL._AC_SL1500.jpg?v=1754683853&width=800",
    "https://brightet.com/cdn/shop/files/81ZXJQ088JL._AC_SL1500.jpg?v=1755360371&width=800",
    "https://brightet.com/cdn/shop/files/61e084786e7f84f4e7f945fdc3ddee6d.jpg?v=1754588002&width=800",
    "https://brightet.com/cdn/shop/files/583633cdd1a19c968336f082cb2dabde.jpg?v=1754684972&width=800",
    "https://brightet.com/cdn/shop/files/71phJFzvoWL._AC_SL1500.jpg?v=1754327915&width=800",
    "https://brightet.com/cdn/shop/files/b626e3158b5011e361f5e3b6b45c5b3c.jpg?v=1755547626&width=800",
];

const TABLE_LAMPS: &[&str] = &[
    "https://brightet.com/cdn/shop/files/81-9cJlklsL._AC_SL1500.jpg?v=1754327894&width=800",
    "https://brightet.com/cdn/shop/files/61khW8PiOTL._AC_SL1500.jpg?v=1754327900&width=800",
];

const FLOOR_LAMPS: &[&str] = &[
    "https://brightet.com/cdn/shop/files/711bFnEy8zL._AC_SL1500.jpg?v=1754328394&width=800",
];

const WALL_LIGHTS: &[&str] = &[
    "https://brightet.com/cdn/shop/files/812nX7k5QbL._AC_SL1500.jpg?v=1754327926&width=800",
    "https://brightet.com/cdn/shop/files/819dJTw8FCL._AC_SL1500.jpg?v=1755545002&width=800",
];

const OUTDOOR_LIGHTING: &[&str] = &[
    "https://brightet.com/cdn/shop/files/81z3HdbrIiL._AC_SL1500.jpg?v=1754327835&width=800",
    "https://brightet.com/cdn/shop/files/81NQfL7ZOkL._AC_SL1500.jpg?v=1754327811&width=800",
];

const PENDANT_LIGHTS: &[&str] = &[
    "https://brightet.com/cdn/shop/files/9eec62f92aacf5320596bb0c7199e0ad.jpg?v=1754327939&width=800",
    "https://brightet.com/cdn/shop/files/77b015e7cb303a9efd7c07ff8700a8cb.jpg?v=1754587766&width=800",
];

// Flat pool cycled by the rotate task, in collection order
const ROTATION: &[&str] = &[
    "https://brightet.com/cdn/shop/files/2c5cfcbb38d77b027814568aa2d77001.jpg?v=1755543215",
    "https://brightet.com/cdn/shop/files/81D70T5ThoL._AC_SL1500.jpg?v=1755360633",
    "https://brightet.com/cdn/shop/files/711bFnEy8zL._AC_SL1500.jpg?v=1754328394",
    "https://brightet.com/cdn/shop/files/82d1330474079571d42eac81908dc01f.jpg?v=1755549649",
    "https://brightet.com/cdn/shop/files/f61db2ded4fd87d9454128161facf1c9_d0542512-f95f-40d9-8e8d-4b332123ee27.jpg?v=1755548988",
    "https://brightet.com/cdn/shop/files/ff3d30e14abcfb9a0d1c03fd164baebc.jpg?v=1755548252",
    "https://brightet.com/cdn/shop/files/981981c4a2c55799ce001ef41c1135ce.jpg?v=1755548251",
    "https://brightet.com/cdn/shop/files/61mR6SzBzGL._AC_SL1500.jpg?v=1755547998",
    "https://brightet.com/cdn/shop/files/36770087971ec19856d7c180819a53de.jpg?v=1755547998",
    "https://brightet.com/cdn/shop/files/f5809762868c703138f95b7212991919.jpg?v=1755547702",
    "https://brightet.com/cdn/shop/files/b626e3158b5011e361f5e3b6b45c5b3c.jpg?v=1755547626",
    "https://brightet.com/cdn/shop/files/173ee5ef7bd9621c4da3ee1de120366c.jpg?v=1755547587",
    "https://brightet.com/cdn/shop/files/71oxYoQDPbL._AC_SL1500.jpg?v=1755547560",
    "https://brightet.com/cdn/shop/files/71DnmxWR6kL._AC_SL1500.jpg?v=1755547447",
    "https://brightet.com/cdn/shop/files/81s1-cX7ThL._AC_SL1500.jpg?v=1755547263",
    "https://brightet.com/cdn/shop/files/81QPOlwO95L._AC_SL1500.jpg?v=1755547200",
    "https://brightet.com/cdn/shop/files/d6e0cd0879c35dee1850b8efb807f956.jpg?v=1755547149",
    "https://brightet.com/cdn/shop/files/81oQXCK9VQL._AC_SL1500.jpg?v=1755547029",
    "https://brightet.com/cdn/shop/files/bac568a56a3554ae11d06d3e3b4a9543.jpg?v=1755546987",
    "https://brightet.com/cdn/shop/files/09fd34c551a7b45d811e0a87350652b1.jpg?v=1755546889",
];

/* ---------------- PoolSet ---------------- */

/// All replacement pools for one run. Immutable once constructed.
#[derive(Debug)]
pub struct PoolSet {
    pub rotation: Vec<String>,
    pub categories: HashMap<String, Vec<String>>,
    pub default_list: Vec<String>,
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

pub fn builtin() -> PoolSet {
    let mut categories = HashMap::new();
    categories.insert("Chandeliers".to_string(), owned(CHANDELIERS));
    categories.insert("Table Lamps".to_string(), owned(TABLE_LAMPS));
    categories.insert("Floor Lamps".to_string(), owned(FLOOR_LAMPS));
    categories.insert("Wall Lights".to_string(), owned(WALL_LIGHTS));
    categories.insert("Outdoor Lighting".to_string(), owned(OUTDOOR_LIGHTING));
    categories.insert("Pendant Lights".to_string(), owned(PENDANT_LIGHTS));
    // No dedicated shots for ceiling lights; chandeliers read close enough
    categories.insert("Ceiling Lights".to_string(), owned(&CHANDELIERS[..5]));

    PoolSet {
        rotation: owned(ROTATION),
        categories,
        default_list: owned(&CHANDELIERS[..1]),
    }
}

/* ---------------- Pools file ---------------- */

#[derive(Deserialize)]
struct PoolsFile {
    rotation: Option<Vec<String>>,
    categories: Option<HashMap<String, Vec<String>>>,
}

/// Load a pools file on top of the built-in tables. Sections omitted from the
/// file keep their built-in values. Unknown category names and empty lists
/// are rejected here, before any remote work starts.
pub fn load(path: &Path) -> Result<PoolSet, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read pools file {}: {}", path.display(), e))?;
    let file: PoolsFile = serde_json::from_str(&text)
        .map_err(|e| format!("invalid pools file {}: {}", path.display(), e))?;

    let mut pools = builtin();

    if let Some(rotation) = file.rotation {
        if rotation.is_empty() {
            return Err("pools file: rotation list is empty".into());
        }
        pools.rotation = rotation;
    }

    if let Some(categories) = file.categories {
        for (name, list) in &categories {
            if !KNOWN_CATEGORIES.contains(&name.as_str()) {
                return Err(format!("pools file: unknown category: {}", name).into());
            }
            if list.is_empty() {
                return Err(format!("pools file: empty list for category: {}", name).into());
            }
        }
        // Override only the categories the file names
        for (name, list) in categories {
            pools.categories.insert(name, list);
        }
    }

    Ok(pools)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_are_consistent() {
        let pools = builtin();
        assert!(!pools.rotation.is_empty());
        assert!(!pools.default_list.is_empty());
        for cat in KNOWN_CATEGORIES {
            let list = pools.categories.get(*cat).expect("category missing");
            assert!(!list.is_empty(), "empty list for {cat}");
        }
    }

    #[test]
    fn ceiling_lights_reuse_chandelier_pool() {
        let pools = builtin();
        let ceiling = &pools.categories["Ceiling Lights"];
        let chand = &pools.categories["Chandeliers"];
        assert_eq!(ceiling.as_slice(), &chand[..5]);
    }
}
