//! Built-in unit catalog
//!
//! Factors convert one unit into its category's base unit (or, for mixed
//! categories, into the base unit named by the unit's dimension).

use super::temperature::TemperatureScale;
use super::{CategoryId, CategoryKind, UnitCategory, UnitDefinition as U};

fn category(id: CategoryId, name: &'static str, kind: CategoryKind, units: Vec<U>) -> UnitCategory {
    UnitCategory { id, name, kind, units }
}

fn pow2(exponent: i32) -> f64 {
    2f64.powi(exponent)
}

/// Every category in display order
pub fn builtin_categories() -> Vec<UnitCategory> {
    vec![
        length(),
        area(),
        volume(),
        mass(),
        time(),
        digital(),
        speed(),
        temperature(),
        pressure(),
        energy(),
        power(),
        angle(),
        historical(),
        obscure(),
        nautical(),
        typography(),
        radiation(),
        cooking(),
    ]
}

// Length (base: meter)
fn length() -> UnitCategory {
    category(
        CategoryId::Length,
        "Length",
        CategoryKind::Linear,
        vec![
            U::base("m", "Meter", "SI"),
            U::linear("km", "Kilometer", 1000.0, "SI"),
            U::linear("cm", "Centimeter", 0.01, "SI"),
            U::linear("mm", "Millimeter", 0.001, "SI"),
            U::linear("in", "Inch", 0.0254, "Imperial"),
            U::linear("ft", "Foot", 0.3048, "Imperial"),
            U::linear("yd", "Yard", 0.9144, "Imperial"),
            U::linear("mi", "Mile", 1609.344, "Imperial"),
            U::linear("nmi", "Nautical Mile", 1852.0, "Nautical"),
            U::linear("au", "Astronomical Unit", 1.495978707e11, "Astronomy"),
            U::linear("ly", "Light Year", 9.46073047e15, "Astronomy"),
            U::linear("pc", "Parsec", 3.08567758e16, "Astronomy"),
            U::linear("cubit", "Cubit (Ancient Egypt)", 0.52, "Historical").describe(
                "An ancient unit based on the forearm length from the elbow to the tip of the middle finger. Varied by region and era.",
            ),
            U::linear("hand", "Hand", 0.1016, "Equestrian")
                .describe("Used to measure horse height at the withers (shoulders)."),
            U::linear("span", "Span", 0.2286, "Historical").describe(
                "Based on the distance from the tip of the thumb to the tip of the little finger when the hand is fully extended.",
            ),
            U::linear("league", "League", 4828.032, "Historical")
                .describe("Originally the distance a person could walk in an hour."),
            U::linear("rod", "Rod (Pole/Perch)", 5.0292, "Historical").describe(
                "Originally defined as the total length of the left feet of the first 16 men to leave church on Sunday morning.",
            ),
            U::linear("chain", "Gunter's Chain", 20.1168, "Surveying")
                .describe("Used in land survey, defined as 66 feet or 100 links."),
            U::linear("angstrom", "Ångström", 1e-10, "Scientific").describe(
                "Used in atomic physics and to express wavelengths of electromagnetic radiation.",
            ),
            U::linear("micron", "Micron", 1e-6, "Scientific"),
            U::linear("thou", "Thou (Mil)", 0.0000254, "Engineering")
                .describe("Used in engineering and manufacturing for small measurements."),
            U::linear("barleycorn", "Barleycorn", 0.008467, "Historical")
                .describe("Traditional English unit, the basis for shoe sizes."),
            U::linear("smoot", "Smoot", 1.7018, "Obscure").describe(
                "Created when MIT student Oliver Smoot was used to measure the Harvard Bridge in 1958.",
            ),
        ],
    )
}

// Area (base: square meter)
fn area() -> UnitCategory {
    category(
        CategoryId::Area,
        "Area",
        CategoryKind::Linear,
        vec![
            U::base("m2", "Square Meter", "SI"),
            U::linear("km2", "Square Kilometer", 1_000_000.0, "SI"),
            U::linear("cm2", "Square Centimeter", 0.0001, "SI"),
            U::linear("mm2", "Square Millimeter", 0.000001, "SI"),
            U::linear("ha", "Hectare", 10_000.0, "SI"),
            U::linear("in2", "Square Inch", 0.00064516, "Imperial"),
            U::linear("ft2", "Square Foot", 0.09290304, "Imperial"),
            U::linear("yd2", "Square Yard", 0.83612736, "Imperial"),
            U::linear("ac", "Acre", 4046.8564224, "Imperial"),
            U::linear("mi2", "Square Mile", 2589988.110336, "Imperial"),
            U::linear("rood", "Rood", 1011.7141056, "Historical")
                .describe("An old English unit equal to quarter of an acre."),
            U::linear("township", "Township", 93239571.9721, "Historical")
                .describe("Used in US land surveys, equal to 36 square miles."),
            U::linear("hide", "Hide", 485_000.0, "Historical").describe(
                "Anglo-Saxon unit representing the amount of land that would support a household.",
            ),
            U::linear("carucate", "Carucate", 490_000.0, "Historical").describe(
                "Medieval unit representing the amount of land that could be plowed by one eight-ox team in a year.",
            ),
            U::linear("barn", "Barn", 1e-28, "Nuclear Physics")
                .describe("Used to measure cross-sectional area in nuclear physics."),
            U::linear("circular_mil", "Circular Mil", 5.067075e-10, "Electrical")
                .describe("Used for measuring wire cross-sectional area in North America."),
            U::linear("ping", "Ping", 3.3057851882, "East Asian")
                .describe("Used in Taiwan, China, and Japan for measuring floor space."),
            U::linear("tatami", "Tatami", 1.62, "Japanese")
                .describe("Traditional Japanese floor mat, used as a unit for measuring room size."),
        ],
    )
}

// Volume (base: cubic meter)
fn volume() -> UnitCategory {
    category(
        CategoryId::Volume,
        "Volume",
        CategoryKind::Linear,
        vec![
            U::base("m3", "Cubic Meter", "SI"),
            U::linear("L", "Liter", 0.001, "SI"),
            U::linear("mL", "Milliliter", 0.000001, "SI"),
            U::linear("cm3", "Cubic Centimeter", 0.000001, "SI"),
            U::linear("mm3", "Cubic Millimeter", 1e-9, "SI"),
            U::linear("gal_us", "US Gallon", 0.00378541, "US"),
            U::linear("qt_us", "US Quart", 0.000946353, "US"),
            U::linear("pt_us", "US Pint", 0.000473176, "US"),
            U::linear("cup_us", "US Cup", 0.000236588, "US"),
            U::linear("fl_oz_us", "US Fluid Ounce", 2.95735e-5, "US"),
            U::linear("tbsp_us", "US Tablespoon", 1.47868e-5, "US"),
            U::linear("tsp_us", "US Teaspoon", 4.92892e-6, "US"),
            U::linear("gal_uk", "UK Gallon", 0.00454609, "UK"),
            U::linear("qt_uk", "UK Quart", 0.00113652, "UK"),
            U::linear("pt_uk", "UK Pint", 0.000568261, "UK"),
            U::linear("fl_oz_uk", "UK Fluid Ounce", 2.84131e-5, "UK"),
            U::linear("in3", "Cubic Inch", 1.6387064e-5, "Imperial"),
            U::linear("ft3", "Cubic Foot", 0.028316846592, "Imperial"),
            U::linear("yd3", "Cubic Yard", 0.764554857984, "Imperial"),
            U::linear("barrel_oil", "Oil Barrel", 0.158987294928, "Industry")
                .describe("Standard unit for oil and petroleum products."),
            U::linear("cord", "Cord", 3.62456, "Forestry")
                .describe("Unit for measuring firewood, equal to 128 cubic feet of stacked wood."),
            U::linear("board_foot", "Board Foot", 0.002359737216, "Lumber")
                .describe("Unit of volume for lumber in North America."),
            U::linear("hogshead", "Hogshead", 0.238481, "Historical")
                .describe("Old English unit for measuring wine and other alcoholic beverages."),
            U::linear("firkin", "Firkin", 0.04091481, "Historical")
                .describe("Traditional unit for butter, soap, and fish."),
            U::linear("noggin", "Noggin", 0.0001420652, "Historical")
                .describe("Old English unit for liquids, about a quarter of a pint."),
            U::linear("jigger", "Jigger", 4.436e-5, "Bartending")
                .describe("Used for measuring spirits in cocktails."),
            U::linear("drop", "Drop", 5e-8, "Cooking/Medicine")
                .describe("Approximate volume of a liquid drop, varies by liquid and dropper."),
        ],
    )
}

// Mass (base: kilogram)
fn mass() -> UnitCategory {
    category(
        CategoryId::Mass,
        "Mass/Weight",
        CategoryKind::Linear,
        vec![
            U::base("kg", "Kilogram", "SI"),
            U::linear("g", "Gram", 0.001, "SI"),
            U::linear("mg", "Milligram", 0.000001, "SI"),
            U::linear("mt", "Metric Ton", 1000.0, "SI"),
            U::linear("lb", "Pound", 0.45359237, "Imperial"),
            U::linear("oz", "Ounce", 0.028349523125, "Imperial"),
            U::linear("st", "Stone", 6.35029318, "UK"),
            U::linear("ton_us", "US Ton (Short)", 907.18474, "US"),
            U::linear("ton_uk", "UK Ton (Long)", 1016.0469088, "UK"),
            U::linear("grain", "Grain", 0.00006479891, "Historical").describe(
                "Originally based on the weight of a grain of wheat or barley. Still used for bullets, arrows, and pharmaceuticals.",
            ),
            U::linear("drachm", "Drachm (Dram)", 0.0017718451953125, "Historical")
                .describe("Ancient Greek unit, used in apothecary systems."),
            U::linear("scruple", "Scruple", 0.00129598, "Historical")
                .describe("Apothecary unit used by pharmacists and jewelers."),
            U::linear("carat", "Carat", 0.0002, "Jewelry").describe("Used for gemstones and pearls."),
            U::linear("dalton", "Dalton (Atomic Mass Unit)", 1.6605390666e-27, "Chemistry")
                .describe("Used in chemistry and physics for atomic and molecular masses."),
            U::linear("slug", "Slug", 14.593903, "Engineering")
                .describe("Unit of mass in the foot-pound-second system."),
            U::linear("assay_ton", "Assay Ton", 0.02917, "Metallurgy")
                .describe("Used in precious metal assaying."),
            U::linear("quintal", "Quintal", 100.0, "Agriculture")
                .describe("Used in agriculture and commodity trading."),
            U::linear("mite", "Mite", 3.2399455e-6, "Historical").describe("Medieval unit, 1/20 of a grain."),
            U::linear("gamma", "Gamma", 1e-9, "Scientific")
                .describe("Used in scientific contexts for very small masses."),
            U::linear("planck_mass", "Planck Mass", 2.176434e-8, "Physics")
                .describe("Natural unit of mass in quantum physics."),
        ],
    )
}

// Time (base: second)
fn time() -> UnitCategory {
    category(
        CategoryId::Time,
        "Time",
        CategoryKind::Linear,
        vec![
            U::base("s", "Second", "SI"),
            U::linear("min", "Minute", 60.0, "Standard"),
            U::linear("h", "Hour", 3600.0, "Standard"),
            U::linear("d", "Day", 86400.0, "Standard"),
            U::linear("wk", "Week", 604800.0, "Standard"),
            U::linear("mo_avg", "Month (Average)", 2629746.0, "Standard"),
            U::linear("yr", "Year (365 days)", 31536000.0, "Standard"),
            U::linear("yr_leap", "Leap Year", 31622400.0, "Standard"),
            U::linear("decade", "Decade", 315360000.0, "Standard"),
            U::linear("century", "Century", 3153600000.0, "Standard"),
            U::linear("millennium", "Millennium", 31536000000.0, "Standard"),
            U::linear("ms", "Millisecond", 0.001, "SI"),
            U::linear("us", "Microsecond", 0.000001, "SI"),
            U::linear("ns", "Nanosecond", 1e-9, "SI"),
            U::linear("ps", "Picosecond", 1e-12, "SI"),
            U::linear("fortnight", "Fortnight", 1209600.0, "Historical")
                .describe("Period of fourteen nights (two weeks)."),
            U::linear("olympiad", "Olympiad", 126144000.0, "Historical")
                .describe("Period of four years between Olympic Games in ancient Greece."),
            U::linear("indiction", "Indiction", 473040000.0, "Historical")
                .describe("15-year cycle used in medieval tax assessment and dating documents."),
            U::linear("lustrum", "Lustrum", 157680000.0, "Historical").describe(
                "Five-year period in ancient Rome, originally the interval between census counts.",
            ),
            U::linear("jiffy", "Jiffy (Electronics)", 1.0 / 60.0, "Technical").describe(
                "In electronics, the time between alternating current power cycles (1/60 or 1/50 second).",
            ),
            U::linear("jiffy_physics", "Jiffy (Physics)", 3e-24, "Physics").describe(
                "In quantum physics, the time it takes light to travel one fermi (about 3×10^-24 seconds).",
            ),
            U::linear("svedberg", "Svedberg", 1e-13, "Biochemistry")
                .describe("Used to measure sedimentation rate in centrifuges."),
            U::linear("planck_time", "Planck Time", 5.39116e-44, "Physics")
                .describe("The smallest meaningful unit of time in physics."),
            U::linear("shake", "Shake", 1e-8, "Nuclear Physics")
                .describe("Used in nuclear physics, approximately 10 nanoseconds."),
            U::linear("moment", "Moment (Medieval)", 90.0, "Historical")
                .describe("Medieval unit of time, 1/40 of an hour or 90 seconds."),
        ],
    )
}

// Digital storage (base: byte). Decimal prefixes follow the binary convention.
fn digital() -> UnitCategory {
    category(
        CategoryId::Digital,
        "Digital Storage",
        CategoryKind::Linear,
        vec![
            U::base("B", "Byte", "Computing"),
            U::linear("KB", "Kilobyte", pow2(10), "Computing"),
            U::linear("MB", "Megabyte", pow2(20), "Computing"),
            U::linear("GB", "Gigabyte", pow2(30), "Computing"),
            U::linear("TB", "Terabyte", pow2(40), "Computing"),
            U::linear("PB", "Petabyte", pow2(50), "Computing"),
            U::linear("EB", "Exabyte", pow2(60), "Computing"),
            U::linear("ZB", "Zettabyte", pow2(70), "Computing"),
            U::linear("YB", "Yottabyte", pow2(80), "Computing"),
            U::linear("bit", "Bit", 0.125, "Computing"),
            U::linear("Kbit", "Kilobit", pow2(7), "Computing"),
            U::linear("Mbit", "Megabit", pow2(17), "Computing"),
            U::linear("Gbit", "Gigabit", pow2(27), "Computing"),
            U::linear("Tbit", "Terabit", pow2(37), "Computing"),
            U::linear("KiB", "Kibibyte", pow2(10), "Computing").describe("Binary kilobyte (2^10 bytes)"),
            U::linear("MiB", "Mebibyte", pow2(20), "Computing").describe("Binary megabyte (2^20 bytes)"),
            U::linear("GiB", "Gibibyte", pow2(30), "Computing").describe("Binary gigabyte (2^30 bytes)"),
            U::linear("TiB", "Tebibyte", pow2(40), "Computing").describe("Binary terabyte (2^40 bytes)"),
            U::linear("PiB", "Pebibyte", pow2(50), "Computing").describe("Binary petabyte (2^50 bytes)"),
            U::linear("EiB", "Exbibyte", pow2(60), "Computing").describe("Binary exabyte (2^60 bytes)"),
            U::linear("ZiB", "Zebibyte", pow2(70), "Computing").describe("Binary zettabyte (2^70 bytes)"),
            U::linear("YiB", "Yobibyte", pow2(80), "Computing").describe("Binary yottabyte (2^80 bytes)"),
            U::linear("word", "Word (16-bit)", 2.0, "Computing")
                .describe("Traditional unit in computing, typically 16 bits or 2 bytes."),
            U::linear("block", "Block (512 bytes)", 512.0, "Storage")
                .describe("Traditional disk storage allocation unit."),
            U::linear("nibble", "Nibble", 0.5, "Computing").describe("4 bits, half a byte."),
            U::linear("sector", "Sector", 512.0, "Storage").describe("Traditional unit of disk storage."),
            U::linear("punch_card", "Punch Card", 80.0, "Historical")
                .describe("IBM punch cards typically stored 80 characters (bytes)."),
        ],
    )
}

// Speed (base: meters per second)
fn speed() -> UnitCategory {
    category(
        CategoryId::Speed,
        "Speed",
        CategoryKind::Linear,
        vec![
            U::base("mps", "Meters per Second", "SI"),
            U::linear("kph", "Kilometers per Hour", 0.277778, "Common"),
            U::linear("mph", "Miles per Hour", 0.44704, "Imperial"),
            U::linear("fps", "Feet per Second", 0.3048, "Imperial"),
            U::linear("knot", "Knot", 0.514444, "Nautical"),
            U::linear("mach", "Mach (at sea level)", 340.29, "Aviation")
                .describe("Speed of sound at sea level and standard temperature."),
            U::linear("c", "Speed of Light", 299792458.0, "Physics"),
            U::linear("furlong_fortnight", "Furlongs per Fortnight", 0.000166309, "Humorous").describe(
                "A humorous unit combining an obscure unit of distance with an obscure unit of time.",
            ),
            U::linear("league_day", "Leagues per Day", 0.05583, "Historical")
                .describe("Historical unit used in maritime navigation."),
            U::linear("earth_orbit", "Earth's Orbital Speed", 29780.0, "Astronomy")
                .describe("Average speed of Earth in its orbit around the Sun."),
            U::linear("continental_drift", "Continental Drift", 1.58e-9, "Geology")
                .describe("Typical speed of tectonic plate movement, about 5 cm per year."),
            U::linear("snail", "Snail's Pace", 0.001, "Biological")
                .describe("Approximate speed of a garden snail."),
            U::linear("cheetah", "Cheetah Sprint", 33.0, "Biological")
                .describe("Top speed of a cheetah, the fastest land animal."),
        ],
    )
}

// Temperature (pivot: Celsius)
fn temperature() -> UnitCategory {
    use TemperatureScale::*;

    category(
        CategoryId::Temperature,
        "Temperature",
        CategoryKind::Temperature,
        vec![
            U::temperature(Celsius, "Celsius", "SI"),
            U::temperature(Fahrenheit, "Fahrenheit", "US"),
            U::temperature(Kelvin, "Kelvin", "Scientific"),
            U::temperature(Rankine, "Rankine", "Engineering")
                .describe("Absolute temperature scale used in engineering in the US."),
            U::temperature(Delisle, "Delisle", "Historical")
                .describe("Created by French astronomer Joseph-Nicolas Delisle in 1732."),
            U::temperature(Newton, "Newton", "Historical").describe("Created by Isaac Newton around 1700."),
            U::temperature(Reaumur, "Réaumur", "Historical")
                .describe("Used in Europe, especially France, in the 18th and 19th centuries."),
            U::temperature(Romer, "Rømer", "Historical")
                .describe("Created by Danish astronomer Ole Christensen Rømer in 1701."),
        ],
    )
}

// Pressure (base: pascal)
fn pressure() -> UnitCategory {
    category(
        CategoryId::Pressure,
        "Pressure",
        CategoryKind::Linear,
        vec![
            U::base("Pa", "Pascal", "SI"),
            U::linear("kPa", "Kilopascal", 1000.0, "SI"),
            U::linear("MPa", "Megapascal", 1_000_000.0, "SI"),
            U::linear("bar", "Bar", 100_000.0, "Meteorology"),
            U::linear("mbar", "Millibar", 100.0, "Meteorology"),
            U::linear("atm", "Atmosphere", 101325.0, "Physics"),
            U::linear("psi", "Pounds per Square Inch", 6894.76, "Imperial"),
            U::linear("torr", "Torr", 133.322, "Scientific"),
            U::linear("mmHg", "Millimeters of Mercury", 133.322, "Medical"),
            U::linear("inHg", "Inches of Mercury", 3386.39, "Weather"),
            U::linear("ftH2O", "Feet of Water", 2989.07, "Engineering"),
            U::linear("dyn_cm2", "Dyne per Square Centimeter", 0.1, "CGS")
                .describe("Unit in the centimeter-gram-second system."),
            U::linear("barye", "Barye", 0.1, "CGS")
                .describe("CGS unit of pressure, equal to 1 dyne per square centimeter."),
            U::linear("at", "Technical Atmosphere", 98066.5, "Engineering")
                .describe("Used in Europe, defined as 1 kilogram-force per square centimeter."),
            U::linear("inH2O", "Inches of Water", 249.089, "Engineering")
                .describe("Used in HVAC, plumbing, and other applications."),
            U::linear("Planck_pressure", "Planck Pressure", 4.63309e113, "Physics")
                .describe("Natural unit of pressure in quantum physics."),
        ],
    )
}

// Energy (base: joule)
fn energy() -> UnitCategory {
    category(
        CategoryId::Energy,
        "Energy",
        CategoryKind::Linear,
        vec![
            U::base("J", "Joule", "SI"),
            U::linear("kJ", "Kilojoule", 1000.0, "SI"),
            U::linear("MJ", "Megajoule", 1_000_000.0, "SI"),
            U::linear("cal", "Calorie", 4.184, "Nutrition"),
            U::linear("kcal", "Kilocalorie", 4184.0, "Nutrition"),
            U::linear("Wh", "Watt-hour", 3600.0, "Electricity"),
            U::linear("kWh", "Kilowatt-hour", 3_600_000.0, "Electricity"),
            U::linear("eV", "Electron Volt", 1.602176634e-19, "Physics"),
            U::linear("keV", "Kiloelectron Volt", 1.602176634e-16, "Physics"),
            U::linear("MeV", "Megaelectron Volt", 1.602176634e-13, "Physics"),
            U::linear("GeV", "Gigaelectron Volt", 1.602176634e-10, "Physics"),
            U::linear("BTU", "British Thermal Unit", 1055.06, "Imperial"),
            U::linear("therm", "Therm", 105506000.0, "Natural Gas")
                .describe("Used for natural gas measurements in the US."),
            U::linear("ft_lbf", "Foot-pound Force", 1.35582, "Imperial")
                .describe("Work done by a force of one pound acting through a distance of one foot."),
            U::linear("erg", "Erg", 1e-7, "CGS")
                .describe("Unit of energy in the centimeter-gram-second system."),
            U::linear("toe", "Tonne of Oil Equivalent", 41868000000.0, "Energy Industry")
                .describe("Amount of energy released by burning one tonne of crude oil."),
            U::linear("tce", "Tonne of Coal Equivalent", 29307600000.0, "Energy Industry")
                .describe("Amount of energy released by burning one tonne of coal."),
            U::linear("TNT", "Ton of TNT", 4184000000.0, "Explosives")
                .describe("Energy released in the detonation of one ton of TNT."),
            U::linear("quad", "Quad", 1055e15, "Energy Policy")
                .describe("Quadrillion BTUs, used in energy policy and analysis."),
        ],
    )
}

// Power (base: watt)
fn power() -> UnitCategory {
    category(
        CategoryId::Power,
        "Power",
        CategoryKind::Linear,
        vec![
            U::base("W", "Watt", "SI"),
            U::linear("kW", "Kilowatt", 1000.0, "SI"),
            U::linear("MW", "Megawatt", 1_000_000.0, "SI"),
            U::linear("GW", "Gigawatt", 1_000_000_000.0, "SI"),
            U::linear("hp", "Horsepower (Mechanical)", 745.7, "Imperial"),
            U::linear("hp_metric", "Horsepower (Metric)", 735.5, "Metric"),
            U::linear("hp_electric", "Horsepower (Electric)", 746.0, "Electrical"),
            U::linear("BTU_h", "BTU per Hour", 0.29307107, "HVAC"),
            U::linear("ft_lbf_s", "Foot-pound Force per Second", 1.35582, "Imperial"),
            U::linear("dBm", "Decibel-milliwatt", 0.001 * 10f64.powf(0.3), "Telecommunications")
                .describe("Power ratio in decibels relative to one milliwatt."),
            U::linear("erg_s", "Erg per Second", 1e-7, "CGS"),
            U::linear("cal_s", "Calorie per Second", 4.184, "Nutrition"),
            U::linear("ton_refrigeration", "Ton of Refrigeration", 3516.85, "HVAC").describe(
                "Cooling power equal to the rate of heat transfer needed to freeze 2000 pounds of water at 0°C in 24 hours.",
            ),
            U::linear("donkey_power", "Donkey Power", 250.0, "Historical")
                .describe("Approximately one-third of a horsepower."),
            U::linear("manpower", "Manpower", 74.57, "Historical")
                .describe("Approximately one-tenth of a horsepower."),
        ],
    )
}

// Angle (base: radian)
fn angle() -> UnitCategory {
    category(
        CategoryId::Angle,
        "Angle",
        CategoryKind::Linear,
        vec![
            U::base("rad", "Radian", "SI"),
            U::linear("deg", "Degree", 0.0174533, "Common"),
            U::linear("arcmin", "Arcminute", 0.000290888, "Astronomy"),
            U::linear("arcsec", "Arcsecond", 4.84814e-6, "Astronomy"),
            U::linear("grad", "Gradian", 0.015708, "Engineering")
                .describe("Also called gon, equal to 1/400 of a full circle."),
            U::linear("turn", "Turn", 6.28319, "Mathematics").describe("A full circle or 360 degrees."),
            U::linear("rev", "Revolution", 6.28319, "Engineering"),
            U::linear("quadrant", "Quadrant", 1.5708, "Navigation")
                .describe("Quarter of a circle or 90 degrees."),
            U::linear("sextant", "Sextant", 1.0472, "Navigation").describe("Sixth of a circle or 60 degrees."),
            U::linear("sign", "Sign", 0.523599, "Astrology")
                .describe("Twelfth of a circle or 30 degrees, used in the zodiac."),
            U::linear("mil_nato", "NATO Mil", 0.0009817477, "Military")
                .describe("Used in artillery, equal to 1/6400 of a circle."),
            U::linear("mil_soviet", "Soviet Mil", 0.0009424778, "Military").describe(
                "Used in former Soviet and Warsaw Pact countries, equal to 1/6000 of a circle.",
            ),
            U::linear("point", "Point (16-wind compass)", 0.3927, "Navigation")
                .describe("Used in the 16-point compass rose, equal to 22.5 degrees."),
        ],
    )
}

// Mixed categories: each unit names the base unit it is expressed in

fn historical() -> UnitCategory {
    category(
        CategoryId::Historical,
        "Historical",
        CategoryKind::Mixed,
        vec![
            U::linear("roman_uncia", "Roman Uncia (Weight)", 0.0272875, "Ancient Rome")
                .in_dimension("kg")
                .describe("1/12 of a Roman pound (libra), about 27.3 grams."),
            U::linear("roman_libra", "Roman Libra (Pound)", 0.32745, "Ancient Rome")
                .in_dimension("kg")
                .describe("Roman pound, about 327.45 grams."),
            U::linear("roman_pes", "Roman Pes (Foot)", 0.296, "Ancient Rome")
                .in_dimension("m")
                .describe("Roman foot, about 29.6 cm."),
            U::linear("roman_passus", "Roman Passus (Pace)", 1.48, "Ancient Rome")
                .in_dimension("m")
                .describe("Roman pace, 5 Roman feet."),
            U::linear("roman_mille_passus", "Roman Mile", 1480.0, "Ancient Rome")
                .in_dimension("m")
                .describe("1000 Roman paces, about 1.48 km."),
            U::linear("biblical_cubit", "Biblical Cubit", 0.45, "Biblical")
                .in_dimension("m")
                .describe("Ancient unit mentioned in the Bible, approximately 18 inches."),
            U::linear("biblical_talent", "Biblical Talent (Weight)", 34.0, "Biblical")
                .in_dimension("kg")
                .describe("Ancient unit of mass mentioned in the Bible."),
            U::linear("biblical_shekel", "Biblical Shekel", 0.011, "Biblical")
                .in_dimension("kg")
                .describe("Ancient unit of currency and weight mentioned in the Bible."),
            U::linear("egyptian_royal_cubit", "Egyptian Royal Cubit", 0.525, "Ancient Egypt")
                .in_dimension("m")
                .describe("Used in ancient Egyptian architecture and construction."),
            U::linear("babylonian_mina", "Babylonian Mina", 0.5, "Mesopotamia")
                .in_dimension("kg")
                .describe("Ancient Babylonian unit of weight."),
            U::linear("greek_stadion", "Greek Stadion", 185.0, "Ancient Greece")
                .in_dimension("m")
                .describe("Ancient Greek unit of length, the origin of the modern stadium."),
            U::linear("greek_drachma", "Greek Drachma (Weight)", 0.0043, "Ancient Greece")
                .in_dimension("kg")
                .describe("Ancient Greek unit of weight and currency."),
            U::linear("chinese_li", "Chinese Li", 500.0, "Ancient China")
                .in_dimension("m")
                .describe("Traditional Chinese unit of distance."),
            U::linear("chinese_jin", "Chinese Jin (Catty)", 0.5, "China")
                .in_dimension("kg")
                .describe("Traditional Chinese unit of weight, still in use."),
            U::linear("japanese_ri", "Japanese Ri", 3927.0, "Japan")
                .in_dimension("m")
                .describe("Traditional Japanese unit of distance."),
            U::linear("japanese_ken", "Japanese Ken", 1.818, "Japan")
                .in_dimension("m")
                .describe("Traditional Japanese unit of length used in architecture."),
            U::linear("japanese_shaku", "Japanese Shaku", 0.303, "Japan")
                .in_dimension("m")
                .describe("Traditional Japanese unit of length."),
            U::linear("indian_yojana", "Indian Yojana", 12000.0, "Ancient India")
                .in_dimension("m")
                .describe("Ancient Indian unit of distance mentioned in Hindu and Buddhist texts."),
        ],
    )
}

fn obscure() -> UnitCategory {
    category(
        CategoryId::Obscure,
        "Obscure/Fun",
        CategoryKind::Mixed,
        vec![
            U::linear("beard_second", "Beard-second", 5e-9, "Humorous")
                .in_dimension("m")
                .describe("Distance a beard grows in one second, approximately 5 nanometers."),
            U::linear("mickey", "Mickey", 0.000127, "Computing")
                .in_dimension("m")
                .describe("The smallest resolvable unit of distance by a computer mouse."),
            U::linear("helen", "Helen", 1.0, "Humorous").in_dimension("helen").describe(
                "The amount of beauty needed to launch a thousand ships. Used humorously to measure beauty.",
            ),
            U::linear("millihelen", "Millihelen", 0.001, "Humorous")
                .in_dimension("helen")
                .describe("Enough beauty to launch a single ship."),
            U::linear("microcentury", "Microcentury", 3153.6, "Academia")
                .in_dimension("s")
                .describe("About 52 minutes and 36 seconds, used by professors to time lectures."),
            U::linear("galactic_year", "Galactic Year", 7.44e15, "Astronomy")
                .in_dimension("s")
                .describe("Time it takes the Sun to orbit the center of the Milky Way, about 230 million Earth years."),
            U::linear("dog_year", "Dog Year", 7.0, "Colloquial").in_dimension("yr").describe(
                "Based on the notion that one calendar year for a dog is equivalent to 7 years for a human.",
            ),
            U::linear("warhol", "Warhol", 900.0, "Pop Culture").in_dimension("s").describe(
                "15 minutes of fame, based on Andy Warhol's statement that 'In the future, everyone will be world-famous for 15 minutes.'",
            ),
            U::linear("kardashian", "Kardashian", 72.0, "Pop Culture").in_dimension("d").describe(
                "Humorously defined as 72 days, the length of Kim Kardashian's marriage to Kris Humphries.",
            ),
            U::linear("sheppey", "Sheppey", 1400.0, "Humorous")
                .in_dimension("m")
                .describe("Distance at which sheep remain picturesque, about 7/8 of a mile."),
            U::linear("barn_megaparsec", "Barn-megaparsec", 3.08567758e-22, "Physics Humor")
                .in_dimension("m3")
                .describe(
                    "Extremely small volume, combination of a very small area (barn) and very large length (megaparsec).",
                ),
            U::linear("nibble", "Nibble", 4.0, "Computing")
                .in_dimension("bit")
                .describe("4 bits, half a byte."),
            U::linear("donkeypower", "Donkeypower", 250.0, "Humorous")
                .in_dimension("W")
                .describe("Approximately one-third of a horsepower."),
            U::linear("pirate_ninja", "Pirate-Ninja", 1.0, "Internet")
                .in_dimension("pirate_ninja")
                .describe("Humorous unit for the ratio of pirates to ninjas in a given population."),
        ],
    )
}

fn nautical() -> UnitCategory {
    category(
        CategoryId::Nautical,
        "Nautical",
        CategoryKind::Mixed,
        vec![
            U::linear("nautical_mile", "Nautical Mile", 1852.0, "Maritime").in_dimension("m"),
            U::linear("cable_length", "Cable Length", 185.2, "Maritime")
                .in_dimension("m")
                .describe("One-tenth of a nautical mile."),
            U::linear("fathom", "Fathom", 1.8288, "Maritime")
                .in_dimension("m")
                .describe("Used for measuring water depth."),
            U::linear("knot", "Knot", 0.514444, "Maritime")
                .in_dimension("mps")
                .describe("One nautical mile per hour."),
            U::linear("league_nautical", "Nautical League", 5556.0, "Maritime")
                .in_dimension("m")
                .describe("Three nautical miles."),
            U::linear("shot", "Shot of Anchor Chain", 27.432, "Maritime")
                .in_dimension("m")
                .describe("Length of anchor chain, 15 fathoms or 90 feet."),
            U::linear("bell", "Ship's Bell", 1800.0, "Maritime")
                .in_dimension("s")
                .describe("Traditional measure of time on a ship, one bell equals 30 minutes."),
            U::linear("watch", "Watch", 14400.0, "Maritime")
                .in_dimension("s")
                .describe("Period of duty, typically 4 hours on a ship."),
            U::linear("glass", "Glass", 1800.0, "Maritime")
                .in_dimension("s")
                .describe("Half-hour measured by a ship's sandglass."),
            U::linear("beaufort", "Beaufort Scale", 1.0, "Maritime")
                .in_dimension("beaufort")
                .describe("Scale for measuring wind speed based on observed sea conditions."),
        ],
    )
}

fn typography() -> UnitCategory {
    category(
        CategoryId::Typography,
        "Typography",
        CategoryKind::Mixed,
        vec![
            U::linear("point", "Point (pt)", 0.000352778, "Typography")
                .in_dimension("m")
                .describe("Traditional unit for measuring font size and line height."),
            U::linear("pica", "Pica", 0.00423333, "Typography")
                .in_dimension("m")
                .describe("12 points, used in typography."),
            U::linear("em", "Em", 1.0, "Typography")
                .in_dimension("em")
                .describe("Relative to the font size, traditionally the width of the capital 'M'."),
            U::linear("en", "En", 0.5, "Typography")
                .in_dimension("em")
                .describe("Half the width of an em."),
            U::linear("didot_point", "Didot Point", 0.000376065, "Typography")
                .in_dimension("m")
                .describe("European typographic unit, slightly larger than the Anglo-American point."),
            U::linear("cicero", "Cicero", 0.00451278, "Typography")
                .in_dimension("m")
                .describe("European typographic unit, 12 Didot points."),
            U::linear("line", "Line", 0.00423333, "Typography")
                .in_dimension("m")
                .describe("1/12 of an inch, equivalent to a pica."),
            U::linear("twip", "Twip", 1.7639e-5, "Typography")
                .in_dimension("m")
                .describe("1/20 of a point, used in some computer typography systems."),
        ],
    )
}

fn radiation() -> UnitCategory {
    category(
        CategoryId::Radiation,
        "Radiation",
        CategoryKind::Mixed,
        vec![
            U::base("Bq", "Becquerel", "SI")
                .in_dimension("Bq")
                .describe("SI unit of radioactivity, one decay per second."),
            U::linear("Ci", "Curie", 3.7e10, "Traditional")
                .in_dimension("Bq")
                .describe("Traditional unit of radioactivity, 3.7×10^10 decays per second."),
            U::base("Gy", "Gray", "SI")
                .in_dimension("Gy")
                .describe("SI unit of absorbed radiation dose, 1 joule per kilogram."),
            U::linear("rad", "Rad", 0.01, "Traditional")
                .in_dimension("Gy")
                .describe("Traditional unit of absorbed radiation dose."),
            U::base("Sv", "Sievert", "SI")
                .in_dimension("Sv")
                .describe("SI unit of equivalent radiation dose, weighted by type of radiation."),
            U::linear("rem", "Rem", 0.01, "Traditional")
                .in_dimension("Sv")
                .describe("Traditional unit of equivalent radiation dose."),
            U::linear("R", "Roentgen", 0.000258, "Traditional")
                .in_dimension("C/kg")
                .describe("Unit of X-ray and gamma ray exposure."),
            U::linear("banana_equivalent", "Banana Equivalent Dose", 1e-7, "Informal")
                .in_dimension("Sv")
                .describe("Humorous unit representing the radiation exposure from eating one banana."),
        ],
    )
}

fn cooking() -> UnitCategory {
    fn m3(id: &'static str, name: &'static str, factor: f64, region: &'static str) -> U {
        U::linear(id, name, factor, region).in_dimension("m3")
    }

    category(
        CategoryId::Cooking,
        "Cooking",
        CategoryKind::Mixed,
        vec![
            m3("tsp_us", "US Teaspoon", 4.92892e-6, "US"),
            m3("tbsp_us", "US Tablespoon", 1.47868e-5, "US"),
            m3("fl_oz_us", "US Fluid Ounce", 2.95735e-5, "US"),
            m3("cup_us", "US Cup", 0.000236588, "US"),
            m3("pt_us", "US Pint", 0.000473176, "US"),
            m3("qt_us", "US Quart", 0.000946353, "US"),
            m3("gal_us", "US Gallon", 0.00378541, "US"),
            m3("tsp_metric", "Metric Teaspoon", 5e-6, "Metric"),
            m3("tbsp_metric", "Metric Tablespoon", 1.5e-5, "Metric"),
            m3("fl_oz_uk", "UK Fluid Ounce", 2.84131e-5, "UK"),
            m3("pt_uk", "UK Pint", 0.000568261, "UK"),
            m3("qt_uk", "UK Quart", 0.00113652, "UK"),
            m3("gal_uk", "UK Gallon", 0.00454609, "UK"),
            m3("dash", "Dash", 5e-7, "Cooking").describe("Approximately 1/8 teaspoon or a few drops."),
            m3("pinch", "Pinch", 2.5e-7, "Cooking")
                .describe("Approximately 1/16 teaspoon or what you can pick up between finger and thumb."),
            m3("drop", "Drop", 5e-8, "Cooking").describe("Approximate volume of a liquid drop, varies by liquid."),
            m3("smidgen", "Smidgen", 1.25e-7, "Cooking").describe("Half a pinch or 1/32 teaspoon."),
            m3("jigger", "Jigger", 4.436e-5, "Bartending")
                .describe("Standard measure for liquor, typically 1.5 fluid ounces."),
        ],
    )
}
