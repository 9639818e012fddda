//! Counting areas and regions of the 2016 EU referendum count.

/// One of the twelve reporting regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub id: &'static str,
    pub name: &'static str,
    /// Number of counting areas in the region.
    pub areas: usize,
}

/// A counting area, keyed by its three-digit number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountingArea {
    pub number: &'static str,
    pub name: &'static str,
    pub region_id: &'static str,
}

pub static REGIONS: [Region; 12] = [
    Region { id: "01", name: "East Midlands", areas: 40 },
    Region { id: "02", name: "Eastern", areas: 47 },
    Region { id: "03", name: "London", areas: 33 },
    Region { id: "04", name: "North East", areas: 12 },
    Region { id: "05", name: "North West", areas: 39 },
    Region { id: "06", name: "Northern Ireland", areas: 1 },
    Region { id: "07", name: "Scotland", areas: 32 },
    Region { id: "08", name: "South East", areas: 67 },
    Region { id: "09", name: "South West & Gibraltar", areas: 38 },
    Region { id: "10", name: "Wales", areas: 22 },
    Region { id: "11", name: "West Midlands", areas: 30 },
    Region { id: "12", name: "Yorkshire & The Humber", areas: 21 },
];

/// Sorted by area number.
pub static AREAS: [CountingArea; 382] = [
    CountingArea { number: "001", name: "Aberdeen", region_id: "07" },
    CountingArea { number: "002", name: "Aberdeenshire", region_id: "07" },
    CountingArea { number: "003", name: "Adur", region_id: "08" },
    CountingArea { number: "004", name: "Allerdale", region_id: "05" },
    CountingArea { number: "005", name: "Amber Valley", region_id: "01" },
    CountingArea { number: "006", name: "Anglesey", region_id: "10" },
    CountingArea { number: "007", name: "Angus", region_id: "07" },
    CountingArea { number: "008", name: "Argyll & Bute", region_id: "07" },
    CountingArea { number: "009", name: "Arun", region_id: "08" },
    CountingArea { number: "010", name: "Ashfield", region_id: "01" },
    CountingArea { number: "011", name: "Ashford", region_id: "08" },
    CountingArea { number: "012", name: "Aylesbury Vale", region_id: "08" },
    CountingArea { number: "013", name: "Babergh", region_id: "02" },
    CountingArea { number: "014", name: "Barking & Dagenham", region_id: "03" },
    CountingArea { number: "015", name: "Barnet", region_id: "03" },
    CountingArea { number: "016", name: "Barnsley", region_id: "12" },
    CountingArea { number: "017", name: "Barrow-in-Furness", region_id: "05" },
    CountingArea { number: "018", name: "Basildon", region_id: "02" },
    CountingArea { number: "019", name: "Basingstoke & Deane", region_id: "08" },
    CountingArea { number: "020", name: "Bassetlaw", region_id: "01" },
    CountingArea { number: "021", name: "Bath & North East Somerset", region_id: "09" },
    CountingArea { number: "022", name: "Bedford", region_id: "02" },
    CountingArea { number: "023", name: "Bexley", region_id: "03" },
    CountingArea { number: "024", name: "Birmingham", region_id: "11" },
    CountingArea { number: "025", name: "Blaby", region_id: "01" },
    CountingArea { number: "026", name: "Blackburn with Darwen", region_id: "05" },
    CountingArea { number: "027", name: "Blackpool", region_id: "05" },
    CountingArea { number: "028", name: "Blaenau Gwent", region_id: "10" },
    CountingArea { number: "029", name: "Bolsover", region_id: "01" },
    CountingArea { number: "030", name: "Bolton", region_id: "05" },
    CountingArea { number: "031", name: "Boston", region_id: "01" },
    CountingArea { number: "032", name: "Bournemouth", region_id: "09" },
    CountingArea { number: "033", name: "Bracknell Forest", region_id: "08" },
    CountingArea { number: "034", name: "Bradford", region_id: "12" },
    CountingArea { number: "035", name: "Braintree", region_id: "02" },
    CountingArea { number: "036", name: "Breckland", region_id: "02" },
    CountingArea { number: "037", name: "Brent", region_id: "03" },
    CountingArea { number: "038", name: "Brentwood", region_id: "02" },
    CountingArea { number: "039", name: "Bridgend", region_id: "10" },
    CountingArea { number: "040", name: "Brighton & Hove", region_id: "08" },
    CountingArea { number: "041", name: "Bristol", region_id: "09" },
    CountingArea { number: "042", name: "Broadland", region_id: "02" },
    CountingArea { number: "043", name: "Bromley", region_id: "03" },
    CountingArea { number: "044", name: "Bromsgrove", region_id: "11" },
    CountingArea { number: "045", name: "Broxbourne", region_id: "02" },
    CountingArea { number: "046", name: "Broxtowe", region_id: "01" },
    CountingArea { number: "047", name: "Burnley", region_id: "05" },
    CountingArea { number: "048", name: "Bury", region_id: "05" },
    CountingArea { number: "049", name: "Caerphilly", region_id: "10" },
    CountingArea { number: "050", name: "Calderdale", region_id: "12" },
    CountingArea { number: "051", name: "Cambridge", region_id: "02" },
    CountingArea { number: "052", name: "Camden", region_id: "03" },
    CountingArea { number: "053", name: "Cannock Chase", region_id: "11" },
    CountingArea { number: "054", name: "Canterbury", region_id: "08" },
    CountingArea { number: "055", name: "Cardiff", region_id: "10" },
    CountingArea { number: "056", name: "Carlisle", region_id: "05" },
    CountingArea { number: "057", name: "Carmarthenshire", region_id: "10" },
    CountingArea { number: "058", name: "Castle Point", region_id: "02" },
    CountingArea { number: "059", name: "Central Bedfordshire", region_id: "02" },
    CountingArea { number: "060", name: "Ceredigion", region_id: "10" },
    CountingArea { number: "061", name: "Charnwood", region_id: "01" },
    CountingArea { number: "062", name: "Chelmsford", region_id: "02" },
    CountingArea { number: "063", name: "Cheltenham", region_id: "09" },
    CountingArea { number: "064", name: "Cherwell", region_id: "08" },
    CountingArea { number: "065", name: "Cheshire East", region_id: "05" },
    CountingArea { number: "066", name: "Cheshire West & Chester", region_id: "05" },
    CountingArea { number: "067", name: "Chesterfield", region_id: "01" },
    CountingArea { number: "068", name: "Chichester", region_id: "08" },
    CountingArea { number: "069", name: "Chiltern", region_id: "08" },
    CountingArea { number: "070", name: "Chorley", region_id: "05" },
    CountingArea { number: "071", name: "Christchurch", region_id: "09" },
    CountingArea { number: "072", name: "City of London", region_id: "03" },
    CountingArea { number: "073", name: "Clackmannanshire", region_id: "07" },
    CountingArea { number: "074", name: "Colchester", region_id: "02" },
    CountingArea { number: "075", name: "Comhairle Nan Eilean Siar", region_id: "07" },
    CountingArea { number: "076", name: "Conwy", region_id: "10" },
    CountingArea { number: "077", name: "Copeland", region_id: "05" },
    CountingArea { number: "078", name: "Corby", region_id: "01" },
    CountingArea { number: "079", name: "Cornwall", region_id: "09" },
    CountingArea { number: "080", name: "Cotswold", region_id: "09" },
    CountingArea { number: "081", name: "Coventry", region_id: "11" },
    CountingArea { number: "082", name: "Craven", region_id: "12" },
    CountingArea { number: "083", name: "Crawley", region_id: "08" },
    CountingArea { number: "084", name: "Croydon", region_id: "03" },
    CountingArea { number: "085", name: "Dacorum", region_id: "02" },
    CountingArea { number: "086", name: "Darlington", region_id: "04" },
    CountingArea { number: "087", name: "Dartford", region_id: "08" },
    CountingArea { number: "088", name: "Daventry", region_id: "01" },
    CountingArea { number: "089", name: "Denbighshire", region_id: "10" },
    CountingArea { number: "090", name: "Derby", region_id: "01" },
    CountingArea { number: "091", name: "Derbyshire Dales", region_id: "01" },
    CountingArea { number: "092", name: "Doncaster", region_id: "12" },
    CountingArea { number: "093", name: "Dover", region_id: "08" },
    CountingArea { number: "094", name: "Dudley", region_id: "11" },
    CountingArea { number: "095", name: "Dumfries & Galloway", region_id: "07" },
    CountingArea { number: "096", name: "Dundee", region_id: "07" },
    CountingArea { number: "097", name: "Durham", region_id: "04" },
    CountingArea { number: "098", name: "Ealing", region_id: "03" },
    CountingArea { number: "099", name: "East Ayrshire", region_id: "07" },
    CountingArea { number: "100", name: "East Cambridgeshire", region_id: "02" },
    CountingArea { number: "101", name: "East Devon", region_id: "09" },
    CountingArea { number: "102", name: "East Dorset", region_id: "09" },
    CountingArea { number: "103", name: "East Dunbartonshire", region_id: "07" },
    CountingArea { number: "104", name: "East Hampshire", region_id: "08" },
    CountingArea { number: "105", name: "East Hertfordshire", region_id: "02" },
    CountingArea { number: "106", name: "East Lindsey", region_id: "01" },
    CountingArea { number: "107", name: "East Lothian", region_id: "07" },
    CountingArea { number: "108", name: "East Northamptonshire", region_id: "01" },
    CountingArea { number: "109", name: "East Renfrewshire", region_id: "07" },
    CountingArea { number: "110", name: "East Riding of Yorkshire", region_id: "12" },
    CountingArea { number: "111", name: "East Staffordshire", region_id: "11" },
    CountingArea { number: "112", name: "Eastbourne", region_id: "08" },
    CountingArea { number: "113", name: "Eastleigh", region_id: "08" },
    CountingArea { number: "114", name: "Eden", region_id: "05" },
    CountingArea { number: "115", name: "Edinburgh", region_id: "07" },
    CountingArea { number: "116", name: "Elmbridge", region_id: "08" },
    CountingArea { number: "117", name: "Enfield", region_id: "03" },
    CountingArea { number: "118", name: "Epping Forest", region_id: "02" },
    CountingArea { number: "119", name: "Epsom & Ewell", region_id: "08" },
    CountingArea { number: "120", name: "Erewash", region_id: "01" },
    CountingArea { number: "121", name: "Exeter", region_id: "09" },
    CountingArea { number: "122", name: "Falkirk", region_id: "07" },
    CountingArea { number: "123", name: "Fareham", region_id: "08" },
    CountingArea { number: "124", name: "Fenland", region_id: "02" },
    CountingArea { number: "125", name: "Fife", region_id: "07" },
    CountingArea { number: "126", name: "Flintshire", region_id: "10" },
    CountingArea { number: "127", name: "Forest Heath", region_id: "02" },
    CountingArea { number: "128", name: "Forest of Dean", region_id: "09" },
    CountingArea { number: "129", name: "Fylde", region_id: "05" },
    CountingArea { number: "130", name: "Gateshead", region_id: "04" },
    CountingArea { number: "131", name: "Gedling", region_id: "01" },
    CountingArea { number: "132", name: "Gibraltar", region_id: "09" },
    CountingArea { number: "133", name: "Glasgow", region_id: "07" },
    CountingArea { number: "134", name: "Gloucester", region_id: "09" },
    CountingArea { number: "135", name: "Gosport", region_id: "08" },
    CountingArea { number: "136", name: "Gravesham", region_id: "08" },
    CountingArea { number: "137", name: "Great Yarmouth", region_id: "02" },
    CountingArea { number: "138", name: "Greenwich", region_id: "03" },
    CountingArea { number: "139", name: "Guildford", region_id: "08" },
    CountingArea { number: "140", name: "Gwynedd", region_id: "10" },
    CountingArea { number: "141", name: "Hackney", region_id: "03" },
    CountingArea { number: "142", name: "Halton", region_id: "05" },
    CountingArea { number: "143", name: "Hambleton", region_id: "12" },
    CountingArea { number: "144", name: "Hammersmith & Fulham", region_id: "03" },
    CountingArea { number: "145", name: "Harborough", region_id: "01" },
    CountingArea { number: "146", name: "Haringey", region_id: "03" },
    CountingArea { number: "147", name: "Harlow", region_id: "02" },
    CountingArea { number: "148", name: "Harrogate", region_id: "12" },
    CountingArea { number: "149", name: "Harrow", region_id: "03" },
    CountingArea { number: "150", name: "Hart", region_id: "08" },
    CountingArea { number: "151", name: "Hartlepool", region_id: "04" },
    CountingArea { number: "152", name: "Hastings", region_id: "08" },
    CountingArea { number: "153", name: "Havant", region_id: "08" },
    CountingArea { number: "154", name: "Havering", region_id: "03" },
    CountingArea { number: "155", name: "Herefordshire", region_id: "11" },
    CountingArea { number: "156", name: "Hertsmere", region_id: "02" },
    CountingArea { number: "157", name: "High Peak", region_id: "01" },
    CountingArea { number: "158", name: "Highland", region_id: "07" },
    CountingArea { number: "159", name: "Hillingdon", region_id: "03" },
    CountingArea { number: "160", name: "Hinckley & Bosworth", region_id: "01" },
    CountingArea { number: "161", name: "Horsham", region_id: "08" },
    CountingArea { number: "162", name: "Hounslow", region_id: "03" },
    CountingArea { number: "163", name: "Huntingdonshire", region_id: "02" },
    CountingArea { number: "164", name: "Hyndburn", region_id: "05" },
    CountingArea { number: "165", name: "Inverclyde", region_id: "07" },
    CountingArea { number: "166", name: "Ipswich", region_id: "02" },
    CountingArea { number: "167", name: "Isle of Wight", region_id: "08" },
    CountingArea { number: "168", name: "Isles of Scilly", region_id: "09" },
    CountingArea { number: "169", name: "Islington", region_id: "03" },
    CountingArea { number: "170", name: "Kensington & Chelsea", region_id: "03" },
    CountingArea { number: "171", name: "Kettering", region_id: "01" },
    CountingArea { number: "172", name: "King's Lynn & West Norfolk", region_id: "02" },
    CountingArea { number: "173", name: "Kingston-upon-Hull", region_id: "12" },
    CountingArea { number: "174", name: "Kingston-upon-Thames", region_id: "03" },
    CountingArea { number: "175", name: "Kirklees", region_id: "12" },
    CountingArea { number: "176", name: "Knowsley", region_id: "05" },
    CountingArea { number: "177", name: "Lambeth", region_id: "03" },
    CountingArea { number: "178", name: "Lancaster", region_id: "05" },
    CountingArea { number: "179", name: "Leeds", region_id: "12" },
    CountingArea { number: "180", name: "Leicester", region_id: "01" },
    CountingArea { number: "181", name: "Lewes", region_id: "08" },
    CountingArea { number: "182", name: "Lewisham", region_id: "03" },
    CountingArea { number: "183", name: "Lichfield", region_id: "11" },
    CountingArea { number: "184", name: "Lincoln", region_id: "01" },
    CountingArea { number: "185", name: "Liverpool", region_id: "05" },
    CountingArea { number: "186", name: "Luton", region_id: "02" },
    CountingArea { number: "187", name: "Maidstone", region_id: "08" },
    CountingArea { number: "188", name: "Maldon", region_id: "02" },
    CountingArea { number: "189", name: "Malvern Hills", region_id: "11" },
    CountingArea { number: "190", name: "Manchester", region_id: "05" },
    CountingArea { number: "191", name: "Mansfield", region_id: "01" },
    CountingArea { number: "192", name: "Medway", region_id: "08" },
    CountingArea { number: "193", name: "Melton", region_id: "01" },
    CountingArea { number: "194", name: "Mendip", region_id: "09" },
    CountingArea { number: "195", name: "Merthyr Tydfil", region_id: "10" },
    CountingArea { number: "196", name: "Merton", region_id: "03" },
    CountingArea { number: "197", name: "Mid Devon", region_id: "09" },
    CountingArea { number: "198", name: "Mid Suffolk", region_id: "02" },
    CountingArea { number: "199", name: "Mid Sussex", region_id: "08" },
    CountingArea { number: "200", name: "Middlesbrough", region_id: "04" },
    CountingArea { number: "201", name: "Midlothian", region_id: "07" },
    CountingArea { number: "202", name: "Milton Keynes", region_id: "08" },
    CountingArea { number: "203", name: "Mole Valley", region_id: "08" },
    CountingArea { number: "204", name: "Monmouthshire", region_id: "10" },
    CountingArea { number: "205", name: "Moray", region_id: "07" },
    CountingArea { number: "206", name: "Neath Port Talbot", region_id: "10" },
    CountingArea { number: "207", name: "New Forest", region_id: "08" },
    CountingArea { number: "208", name: "Newark & Sherwood", region_id: "01" },
    CountingArea { number: "209", name: "Newcastle-under-Lyme", region_id: "11" },
    CountingArea { number: "210", name: "Newcastle-upon-Tyne", region_id: "04" },
    CountingArea { number: "211", name: "Newham", region_id: "03" },
    CountingArea { number: "212", name: "Newport", region_id: "10" },
    CountingArea { number: "213", name: "North Ayrshire", region_id: "07" },
    CountingArea { number: "214", name: "North Devon", region_id: "09" },
    CountingArea { number: "215", name: "North Dorset", region_id: "09" },
    CountingArea { number: "216", name: "North East Derbyshire", region_id: "01" },
    CountingArea { number: "217", name: "North East Lincolnshire", region_id: "12" },
    CountingArea { number: "218", name: "North Hertfordshire", region_id: "02" },
    CountingArea { number: "219", name: "North Kesteven", region_id: "01" },
    CountingArea { number: "220", name: "North Lanarkshire", region_id: "07" },
    CountingArea { number: "221", name: "North Lincolnshire", region_id: "12" },
    CountingArea { number: "222", name: "North Norfolk", region_id: "02" },
    CountingArea { number: "223", name: "North Somerset", region_id: "09" },
    CountingArea { number: "224", name: "North Tyneside", region_id: "04" },
    CountingArea { number: "225", name: "North Warwickshire", region_id: "11" },
    CountingArea { number: "226", name: "North West Leicestershire", region_id: "01" },
    CountingArea { number: "227", name: "Northampton", region_id: "01" },
    CountingArea { number: "228", name: "Northern Ireland", region_id: "06" },
    CountingArea { number: "229", name: "Northumberland", region_id: "04" },
    CountingArea { number: "230", name: "Norwich", region_id: "02" },
    CountingArea { number: "231", name: "Nottingham", region_id: "01" },
    CountingArea { number: "232", name: "Nuneaton & Bedworth", region_id: "11" },
    CountingArea { number: "233", name: "Oadby & Wigston", region_id: "01" },
    CountingArea { number: "234", name: "Oldham", region_id: "05" },
    CountingArea { number: "235", name: "Orkney Islands", region_id: "07" },
    CountingArea { number: "236", name: "Oxford", region_id: "08" },
    CountingArea { number: "237", name: "Pembrokeshire", region_id: "10" },
    CountingArea { number: "238", name: "Pendle", region_id: "05" },
    CountingArea { number: "239", name: "Perth & Kinross", region_id: "07" },
    CountingArea { number: "240", name: "Peterborough", region_id: "02" },
    CountingArea { number: "241", name: "Plymouth", region_id: "09" },
    CountingArea { number: "242", name: "Poole", region_id: "09" },
    CountingArea { number: "243", name: "Portsmouth", region_id: "08" },
    CountingArea { number: "244", name: "Powys", region_id: "10" },
    CountingArea { number: "245", name: "Preston", region_id: "05" },
    CountingArea { number: "246", name: "Purbeck", region_id: "09" },
    CountingArea { number: "247", name: "Reading", region_id: "08" },
    CountingArea { number: "248", name: "Redbridge", region_id: "03" },
    CountingArea { number: "249", name: "Redcar & Cleveland", region_id: "04" },
    CountingArea { number: "250", name: "Redditch", region_id: "11" },
    CountingArea { number: "251", name: "Reigate & Banstead", region_id: "08" },
    CountingArea { number: "252", name: "Renfrewshire", region_id: "07" },
    CountingArea { number: "253", name: "Rhondda Cynon Taf", region_id: "10" },
    CountingArea { number: "254", name: "Ribble Valley", region_id: "05" },
    CountingArea { number: "255", name: "Richmond-upon-Thames", region_id: "03" },
    CountingArea { number: "256", name: "Richmondshire", region_id: "12" },
    CountingArea { number: "257", name: "Rochdale", region_id: "05" },
    CountingArea { number: "258", name: "Rochford", region_id: "02" },
    CountingArea { number: "259", name: "Rossendale", region_id: "05" },
    CountingArea { number: "260", name: "Rother", region_id: "08" },
    CountingArea { number: "261", name: "Rotherham", region_id: "12" },
    CountingArea { number: "262", name: "Rugby", region_id: "11" },
    CountingArea { number: "263", name: "Runnymede", region_id: "08" },
    CountingArea { number: "264", name: "Rushcliffe", region_id: "01" },
    CountingArea { number: "265", name: "Rushmoor", region_id: "08" },
    CountingArea { number: "266", name: "Rutland", region_id: "01" },
    CountingArea { number: "267", name: "Ryedale", region_id: "12" },
    CountingArea { number: "268", name: "Salford", region_id: "05" },
    CountingArea { number: "269", name: "Sandwell", region_id: "11" },
    CountingArea { number: "270", name: "Scarborough", region_id: "12" },
    CountingArea { number: "271", name: "Scottish Borders", region_id: "07" },
    CountingArea { number: "272", name: "Sedgemoor", region_id: "09" },
    CountingArea { number: "273", name: "Sefton", region_id: "05" },
    CountingArea { number: "274", name: "Selby", region_id: "12" },
    CountingArea { number: "275", name: "Sevenoaks", region_id: "08" },
    CountingArea { number: "276", name: "Sheffield", region_id: "12" },
    CountingArea { number: "277", name: "Shepway", region_id: "08" },
    CountingArea { number: "278", name: "Shetland Islands", region_id: "07" },
    CountingArea { number: "279", name: "Shropshire", region_id: "11" },
    CountingArea { number: "280", name: "Slough", region_id: "08" },
    CountingArea { number: "281", name: "Solihull", region_id: "11" },
    CountingArea { number: "282", name: "South Ayrshire", region_id: "07" },
    CountingArea { number: "283", name: "South Bucks", region_id: "08" },
    CountingArea { number: "284", name: "South Cambridgeshire", region_id: "02" },
    CountingArea { number: "285", name: "South Derbyshire", region_id: "01" },
    CountingArea { number: "286", name: "South Gloucestershire", region_id: "09" },
    CountingArea { number: "287", name: "South Hams", region_id: "09" },
    CountingArea { number: "288", name: "South Holland", region_id: "01" },
    CountingArea { number: "289", name: "South Kesteven", region_id: "01" },
    CountingArea { number: "290", name: "South Lakeland", region_id: "05" },
    CountingArea { number: "291", name: "South Lanarkshire", region_id: "07" },
    CountingArea { number: "292", name: "South Norfolk", region_id: "02" },
    CountingArea { number: "293", name: "South Northamptonshire", region_id: "01" },
    CountingArea { number: "294", name: "South Oxfordshire", region_id: "08" },
    CountingArea { number: "295", name: "South Ribble", region_id: "05" },
    CountingArea { number: "296", name: "South Somerset", region_id: "09" },
    CountingArea { number: "297", name: "South Staffordshire", region_id: "11" },
    CountingArea { number: "298", name: "South Tyneside", region_id: "04" },
    CountingArea { number: "299", name: "Southampton", region_id: "08" },
    CountingArea { number: "300", name: "Southend-on-Sea", region_id: "02" },
    CountingArea { number: "301", name: "Southwark", region_id: "03" },
    CountingArea { number: "302", name: "Spelthorne", region_id: "08" },
    CountingArea { number: "303", name: "St Albans", region_id: "02" },
    CountingArea { number: "304", name: "St Edmundsbury", region_id: "02" },
    CountingArea { number: "305", name: "St Helens", region_id: "05" },
    CountingArea { number: "306", name: "Stafford", region_id: "11" },
    CountingArea { number: "307", name: "Staffordshire Moorlands", region_id: "11" },
    CountingArea { number: "308", name: "Stevenage", region_id: "02" },
    CountingArea { number: "309", name: "Stirling", region_id: "07" },
    CountingArea { number: "310", name: "Stockport", region_id: "05" },
    CountingArea { number: "311", name: "Stockton-on-Tees", region_id: "04" },
    CountingArea { number: "312", name: "Stoke-on-Trent", region_id: "11" },
    CountingArea { number: "313", name: "Stratford-on-Avon", region_id: "11" },
    CountingArea { number: "314", name: "Stroud", region_id: "09" },
    CountingArea { number: "315", name: "Suffolk Coastal", region_id: "02" },
    CountingArea { number: "316", name: "Sunderland", region_id: "04" },
    CountingArea { number: "317", name: "Surrey Heath", region_id: "08" },
    CountingArea { number: "318", name: "Sutton", region_id: "03" },
    CountingArea { number: "319", name: "Swale", region_id: "08" },
    CountingArea { number: "320", name: "Swansea", region_id: "10" },
    CountingArea { number: "321", name: "Swindon", region_id: "09" },
    CountingArea { number: "322", name: "Tameside", region_id: "05" },
    CountingArea { number: "323", name: "Tamworth", region_id: "11" },
    CountingArea { number: "324", name: "Tandridge", region_id: "08" },
    CountingArea { number: "325", name: "Taunton Deane", region_id: "09" },
    CountingArea { number: "326", name: "Teignbridge", region_id: "09" },
    CountingArea { number: "327", name: "Telford & Wrekin", region_id: "11" },
    CountingArea { number: "328", name: "Tendring", region_id: "02" },
    CountingArea { number: "329", name: "Test Valley", region_id: "08" },
    CountingArea { number: "330", name: "Tewkesbury", region_id: "09" },
    CountingArea { number: "331", name: "Thanet", region_id: "08" },
    CountingArea { number: "332", name: "Three Rivers", region_id: "02" },
    CountingArea { number: "333", name: "Thurrock", region_id: "02" },
    CountingArea { number: "334", name: "Tonbridge & Malling", region_id: "08" },
    CountingArea { number: "335", name: "Torbay", region_id: "09" },
    CountingArea { number: "336", name: "Torfaen", region_id: "10" },
    CountingArea { number: "337", name: "Torridge", region_id: "09" },
    CountingArea { number: "338", name: "Tower Hamlets", region_id: "03" },
    CountingArea { number: "339", name: "Trafford", region_id: "05" },
    CountingArea { number: "340", name: "Tunbridge Wells", region_id: "08" },
    CountingArea { number: "341", name: "Uttlesford", region_id: "02" },
    CountingArea { number: "342", name: "Vale of Glamorgan", region_id: "10" },
    CountingArea { number: "343", name: "Vale of White Horse", region_id: "08" },
    CountingArea { number: "344", name: "Wakefield", region_id: "12" },
    CountingArea { number: "345", name: "Walsall", region_id: "11" },
    CountingArea { number: "346", name: "Waltham Forest", region_id: "03" },
    CountingArea { number: "347", name: "Wandsworth", region_id: "03" },
    CountingArea { number: "348", name: "Warrington", region_id: "05" },
    CountingArea { number: "349", name: "Warwick", region_id: "11" },
    CountingArea { number: "350", name: "Watford", region_id: "02" },
    CountingArea { number: "351", name: "Waveney", region_id: "02" },
    CountingArea { number: "352", name: "Waverley", region_id: "08" },
    CountingArea { number: "353", name: "Wealden", region_id: "08" },
    CountingArea { number: "354", name: "Wellingborough", region_id: "01" },
    CountingArea { number: "355", name: "Welwyn Hatfield", region_id: "02" },
    CountingArea { number: "356", name: "West Berkshire", region_id: "08" },
    CountingArea { number: "357", name: "West Devon", region_id: "09" },
    CountingArea { number: "358", name: "West Dorset", region_id: "09" },
    CountingArea { number: "359", name: "West Dunbartonshire", region_id: "07" },
    CountingArea { number: "360", name: "West Lancashire", region_id: "05" },
    CountingArea { number: "361", name: "West Lindsey", region_id: "01" },
    CountingArea { number: "362", name: "West Lothian", region_id: "07" },
    CountingArea { number: "363", name: "West Oxfordshire", region_id: "08" },
    CountingArea { number: "364", name: "West Somerset", region_id: "09" },
    CountingArea { number: "365", name: "Westminster", region_id: "03" },
    CountingArea { number: "366", name: "Weymouth & Portland", region_id: "09" },
    CountingArea { number: "367", name: "Wigan", region_id: "05" },
    CountingArea { number: "368", name: "Wiltshire", region_id: "09" },
    CountingArea { number: "369", name: "Winchester", region_id: "08" },
    CountingArea { number: "370", name: "Windsor & Maidenhead Royal", region_id: "08" },
    CountingArea { number: "371", name: "Wirral", region_id: "05" },
    CountingArea { number: "372", name: "Woking", region_id: "08" },
    CountingArea { number: "373", name: "Wokingham", region_id: "08" },
    CountingArea { number: "374", name: "Wolverhampton", region_id: "11" },
    CountingArea { number: "375", name: "Worcester", region_id: "11" },
    CountingArea { number: "376", name: "Worthing", region_id: "08" },
    CountingArea { number: "377", name: "Wrexham", region_id: "10" },
    CountingArea { number: "378", name: "Wychavon", region_id: "11" },
    CountingArea { number: "379", name: "Wycombe", region_id: "08" },
    CountingArea { number: "380", name: "Wyre", region_id: "05" },
    CountingArea { number: "381", name: "Wyre Forest", region_id: "11" },
    CountingArea { number: "382", name: "York", region_id: "12" },
];

pub fn area(number: &str) -> Option<&'static CountingArea> {
    AREAS
        .binary_search_by(|a| a.number.cmp(number))
        .ok()
        .map(|index| &AREAS[index])
}

pub fn region(id: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.id == id)
}
